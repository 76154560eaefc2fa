// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components return effects; this module turns them into tasks:
//! - image loads go through the decoded image cache and the loader;
//! - debounces become timers, listings fetches and favorite toggles become
//!   requests on the listings client;
//! - every image outcome is broadcast to the gallery page and the listings
//!   panel, since any element showing that reference must hear about it.

use super::persisted_state::AppState;
use super::screen::{Detail, Screen};
use super::Message;
use crate::domain::gallery::ImageRef;
use crate::error::Error;
use crate::gallery::{page, GalleryLayout, GalleryOptions, GalleryPage};
use crate::listings::{favorite, panel, FavoriteButton, Listing, ListingsClient, ListingsPanel};
use crate::media::{ImageCache, ImageData, ImageLoader};
use crate::ui::listings_view;
use crate::ui::notifications;
use iced::Task;

/// Network services built from the `[server]` section.
///
/// Either may be missing when the configuration is unusable; the features
/// depending on it then fail like an unreachable server would.
#[derive(Debug, Clone, Default)]
pub struct Services {
    pub client: Option<ListingsClient>,
    pub loader: Option<ImageLoader>,
}

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub panel: &'a mut ListingsPanel,
    pub page: &'a mut GalleryPage,
    pub detail: &'a mut Option<Detail>,
    pub cache: &'a mut ImageCache,
    pub services: &'a Services,
    pub gallery_options: &'a GalleryOptions,
    pub app_state: &'a mut AppState,
    pub notifications: &'a mut notifications::Manager,
}

fn unavailable(what: &str) -> Error {
    Error::Config(format!("{what} unavailable: check the [server] settings"))
}

// =============================================================================
// Images
// =============================================================================

/// Starts loading `references`. Cached images are delivered at once;
/// references already being fetched are not fetched twice.
pub fn load_images(ctx: &mut UpdateContext<'_>, references: Vec<ImageRef>) -> Task<Message> {
    if references.is_empty() {
        return Task::none();
    }

    let cached: Vec<ImageRef> = references
        .iter()
        .filter(|reference| ctx.cache.contains(reference))
        .cloned()
        .collect();
    let to_fetch = ctx.cache.begin_fetch(&references);

    let mut tasks = Vec::with_capacity(to_fetch.len() + 1);
    let mut follow_up = Vec::new();
    for reference in cached {
        follow_up.extend(broadcast_loaded(ctx, &reference));
    }

    for reference in to_fetch {
        tracing::debug!(%reference, "fetching image");
        let task = match ctx.services.loader.clone() {
            Some(loader) => {
                let target = reference.clone();
                Task::perform(async move { loader.load(&target).await }, move |result| {
                    Message::ImageFetched(reference.clone(), result)
                })
            }
            None => Task::done(Message::ImageFetched(
                reference,
                Err(unavailable("image loader")),
            )),
        };
        tasks.push(task);
    }

    if !follow_up.is_empty() {
        tasks.push(load_images(ctx, follow_up));
    }
    Task::batch(tasks)
}

/// Stores or discards a fetched image and notifies every element showing it.
pub fn handle_image_fetched(
    ctx: &mut UpdateContext<'_>,
    reference: ImageRef,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    let follow_up = match result {
        Ok(image) => {
            let (page, panel) = (&*ctx.page, &*ctx.panel);
            ctx.cache.insert(reference.clone(), image, |shown| {
                page.shows(shown) || panel.shows(shown)
            });
            broadcast_loaded(ctx, &reference)
        }
        Err(err) => {
            tracing::warn!(%reference, %err, "image failed to load");
            ctx.cache.fail(&reference);
            broadcast_failed(ctx, &reference)
        }
    };
    load_images(ctx, follow_up)
}

fn broadcast_loaded(ctx: &mut UpdateContext<'_>, reference: &ImageRef) -> Vec<ImageRef> {
    let mut loads = Vec::new();
    if let page::Effect::Load(refs) = ctx.page.handle(page::Message::ImageLoaded(reference.clone())) {
        loads.extend(refs);
    }
    if let panel::Effect::LoadImages(refs) =
        ctx.panel.handle(panel::Message::ImageLoaded(reference.clone()))
    {
        loads.extend(refs);
    }
    loads
}

fn broadcast_failed(ctx: &mut UpdateContext<'_>, reference: &ImageRef) -> Vec<ImageRef> {
    let mut loads = Vec::new();
    if let page::Effect::Load(refs) = ctx.page.handle(page::Message::ImageFailed(reference.clone())) {
        loads.extend(refs);
    }
    if let panel::Effect::LoadImages(refs) =
        ctx.panel.handle(panel::Message::ImageFailed(reference.clone()))
    {
        loads.extend(refs);
    }
    loads
}

// =============================================================================
// Listings
// =============================================================================

pub fn handle_listings_message(
    ctx: &mut UpdateContext<'_>,
    message: listings_view::Message,
) -> Task<Message> {
    match message {
        listings_view::Message::Panel(panel_message) => {
            let succeeded = matches!(panel_message, panel::Message::Loaded(_, Ok(_)));
            let effect = ctx.panel.handle(panel_message);
            if succeeded {
                remember_applied_query(ctx);
            }
            handle_panel_effect(ctx, effect)
        }
        listings_view::Message::OpenListing(id) => {
            let Some(listing) = ctx
                .panel
                .listings()
                .iter()
                .find(|listing| listing.id == id)
                .cloned()
            else {
                return Task::none();
            };
            open_detail(ctx, listing)
        }
    }
}

/// Runs the side effect a panel message asked for.
pub fn handle_panel_effect(ctx: &mut UpdateContext<'_>, effect: panel::Effect) -> Task<Message> {
    match effect {
        panel::Effect::None => Task::none(),
        panel::Effect::Debounce { generation, delay } => {
            Task::perform(tokio::time::sleep(delay), move |()| {
                Message::Listings(listings_view::Message::Panel(
                    panel::Message::DebounceElapsed(generation),
                ))
            })
        }
        panel::Effect::Fetch(values) => {
            let requested = values.clone();
            let loaded = move |result| {
                Message::Listings(listings_view::Message::Panel(panel::Message::Loaded(
                    requested.clone(),
                    result,
                )))
            };
            match ctx.services.client.clone() {
                Some(client) => Task::perform(
                    async move { client.fetch_listings(&values).await },
                    loaded,
                ),
                None => Task::done(loaded(Err(unavailable("listings client")))),
            }
        }
        panel::Effect::LoadImages(references) => load_images(ctx, references),
    }
}

fn remember_applied_query(ctx: &mut UpdateContext<'_>) {
    let Some(applied) = ctx.panel.applied() else {
        return;
    };
    if ctx.app_state.remember_query(applied) {
        if let Some(key) = ctx.app_state.save() {
            ctx.notifications
                .push(notifications::Notification::warning(&key));
        }
    }
}

// =============================================================================
// Screens
// =============================================================================

/// Shows `listing` with a full gallery of its images.
pub fn open_detail(ctx: &mut UpdateContext<'_>, listing: Listing) -> Task<Message> {
    reset_page(ctx);

    let mut loads = Vec::new();
    let gallery = listing.gallery_source().map(|source| {
        let (id, initial) = ctx.page.add_gallery(source, &GalleryLayout::full());
        ctx.page.focus(id);
        loads = initial;
        id
    });

    tracing::info!(listing = listing.id, title = %listing.title, "opening listing");
    *ctx.detail = Some(Detail {
        favorite: FavoriteButton::new(listing.id, listing.is_favorited, listing.favorite_count),
        listing,
        gallery,
    });
    *ctx.screen = Screen::Detail;
    load_images(ctx, loads)
}

pub fn back_to_listings(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    reset_page(ctx);
    *ctx.detail = None;
    *ctx.screen = Screen::Listings;
    ctx.notifications.clear_matching("notification-favorite-");
    let stats = ctx.cache.stats();
    tracing::debug!(
        hits = stats.hits,
        misses = stats.misses,
        evictions = stats.evictions,
        cached = ctx.cache.len(),
        "back to listings"
    );
    Task::none()
}

/// Drops the current galleries, closing any open overlay first.
fn reset_page(ctx: &mut UpdateContext<'_>) {
    ctx.page.close_overlay();
    *ctx.page = GalleryPage::new(ctx.gallery_options.clone());
}

// =============================================================================
// Gallery and favorite
// =============================================================================

pub fn handle_gallery_message(ctx: &mut UpdateContext<'_>, message: page::Message) -> Task<Message> {
    match ctx.page.handle(message) {
        page::Effect::None => Task::none(),
        page::Effect::Load(references) => load_images(ctx, references),
    }
}

pub fn handle_favorite_message(
    ctx: &mut UpdateContext<'_>,
    message: favorite::Message,
) -> Task<Message> {
    let Some(detail) = ctx.detail.as_mut() else {
        return Task::none();
    };

    if let favorite::Message::Completed(listing_id, _) = &message {
        if *listing_id != detail.favorite.listing_id() {
            tracing::debug!(
                listing_id,
                showing = detail.favorite.listing_id(),
                "dropping favorite response for a closed listing"
            );
            return Task::none();
        }
    }

    let failed = matches!(message, favorite::Message::Completed(_, Err(_)));
    let effect = detail.favorite.handle(message);
    if failed {
        ctx.notifications.push(
            notifications::Notification::error("notification-favorite-error")
                .with_arg("title", detail.listing.title.clone()),
        );
    }

    match effect {
        favorite::Effect::None => Task::none(),
        favorite::Effect::Toggle(listing_id) => {
            let completed =
                move |result| Message::Favorite(favorite::Message::Completed(listing_id, result));
            match ctx.services.client.clone() {
                Some(client) => Task::perform(
                    async move { client.toggle_favorite(listing_id).await },
                    completed,
                ),
                None => Task::done(completed(Err(unavailable("listings client")))),
            }
        }
    }
}
