// SPDX-License-Identifier: MPL-2.0
//! Favorite toggle button of a listing card or detail page.

use super::model::FavoriteResponse;
use crate::error::Error;
use crate::i18n::fluent::I18n;

#[derive(Debug, Clone)]
pub enum Message {
    Pressed,
    /// The toggle request for a listing settled.
    Completed(u64, Result<FavoriteResponse, Error>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Send the toggle request for this listing.
    Toggle(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteButton {
    listing_id: u64,
    favorited: bool,
    count: u32,
    pending: bool,
}

impl FavoriteButton {
    #[must_use]
    pub fn new(listing_id: u64, favorited: bool, count: u32) -> Self {
        Self {
            listing_id,
            favorited,
            count,
            pending: false,
        }
    }

    /// Applies `message`; responses for another listing are ignored.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Pressed => {
                if self.pending {
                    return Effect::None;
                }
                self.pending = true;
                Effect::Toggle(self.listing_id)
            }
            Message::Completed(listing_id, _) if listing_id != self.listing_id => Effect::None,
            Message::Completed(_, Ok(response)) => {
                self.pending = false;
                self.favorited = response.is_favorited;
                self.count = response.favorite_count;
                Effect::None
            }
            Message::Completed(_, Err(err)) => {
                self.pending = false;
                tracing::error!(listing_id = self.listing_id, %err, "favorite toggle failed");
                Effect::None
            }
        }
    }

    /// Button caption, "Liked (3)" / "Like (3)", the count omitted at zero.
    #[must_use]
    pub fn label(&self, i18n: &I18n) -> String {
        match (self.favorited, self.count) {
            (true, 0) => i18n.tr("favorite-liked"),
            (false, 0) => i18n.tr("favorite-like"),
            (true, count) => i18n.tr_with_args("favorite-liked-count", &[("count", &count.to_string())]),
            (false, count) => i18n.tr_with_args("favorite-like-count", &[("count", &count.to_string())]),
        }
    }

    #[must_use]
    pub fn listing_id(&self) -> u64 {
        self.listing_id
    }

    #[must_use]
    pub fn is_favorited(&self) -> bool {
        self.favorited
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn press_requests_toggle_once_until_settled() {
        let mut button = FavoriteButton::new(9, false, 2);
        assert_eq!(button.handle(Message::Pressed), Effect::Toggle(9));
        assert!(button.is_pending());
        assert_eq!(button.handle(Message::Pressed), Effect::None);
    }

    #[test]
    fn response_applies_server_state() {
        let mut button = FavoriteButton::new(9, false, 2);
        let _ = button.handle(Message::Pressed);
        let _ = button.handle(Message::Completed(
            9,
            Ok(FavoriteResponse {
                is_favorited: true,
                favorite_count: 3,
            }),
        ));
        assert!(button.is_favorited());
        assert_eq!(button.count(), 3);
        assert!(!button.is_pending());
    }

    #[test]
    fn failure_restores_button_without_changing_state() {
        let mut button = FavoriteButton::new(9, true, 5);
        let _ = button.handle(Message::Pressed);
        let _ = button.handle(Message::Completed(9, Err(Error::Network("offline".into()))));
        assert_eq!(button, FavoriteButton::new(9, true, 5));
    }

    #[test]
    fn response_for_another_listing_is_ignored() {
        let mut button = FavoriteButton::new(13, false, 0);
        let _ = button.handle(Message::Pressed);
        let effect = button.handle(Message::Completed(
            12,
            Ok(FavoriteResponse {
                is_favorited: true,
                favorite_count: 41,
            }),
        ));

        assert_eq!(effect, Effect::None);
        assert!(!button.is_favorited());
        assert_eq!(button.count(), 0);
        assert!(button.is_pending());
    }

    #[test]
    fn label_includes_count_when_positive() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(FavoriteButton::new(1, true, 4).label(&i18n), "Liked (4)");
        assert_eq!(FavoriteButton::new(1, false, 4).label(&i18n), "Like (4)");
        assert_eq!(FavoriteButton::new(1, false, 0).label(&i18n), "Like");
    }
}
