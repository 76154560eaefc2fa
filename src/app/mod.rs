// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the listings, detail,
//! and gallery screens.
//!
//! The `App` struct wires together the domains (listings panel, gallery
//! page, image cache, localization) and translates messages into side
//! effects like HTTP requests, image loading, or state persistence.

mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::{Detail, Screen};
pub use subscription::route_event;

use crate::config::{self, Config};
use crate::domain::gallery::ImageRef;
use crate::gallery::{GalleryLayout, GalleryOptions, GalleryPage, GallerySource, SlideSpec};
use crate::i18n::fluent::I18n;
use crate::listings::{ListingsClient, ListingsPanel};
use crate::media::{ImageCache, ImageLoader};
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use update::Services;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    panel: ListingsPanel,
    /// Galleries of the detail or standalone screen.
    page: GalleryPage,
    detail: Option<Detail>,
    cache: ImageCache,
    services: Services,
    gallery_options: GalleryOptions,
    theme_mode: ThemeMode,
    /// Persisted application state (last listings query).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("listings", &self.panel.listings().len())
            .field("cached_images", &self.cache.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot function to be `Fn`; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::from_config(Config::default(), &Flags::default())
    }
}

impl App {
    /// Builds the state for `config` without starting any task.
    fn from_config(config: Config, flags: &Flags) -> Self {
        let i18n = I18n::new(flags.lang.clone(), &config);
        let gallery_options = GalleryOptions::from_config(&config.gallery);
        let panel = ListingsPanel::new(
            Default::default(),
            config.listings.debounce(),
            config.listings.columns(),
            gallery_options.placeholder.clone(),
        );

        Self {
            i18n,
            screen: Screen::Listings,
            panel,
            page: GalleryPage::new(gallery_options.clone()),
            detail: None,
            cache: ImageCache::new(config.cache.image_entries()),
            services: Services::default(),
            gallery_options,
            theme_mode: config.general.theme_mode,
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
            config,
        }
    }

    /// Loads config and state, then starts on the listings or, when image
    /// references were given, on a standalone gallery screen.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        if let Some(base_url) = flags.base_url.clone() {
            config.server.base_url = base_url;
        }

        let mut app = Self::from_config(config, &flags);
        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        let (app_state, state_warning) = persisted_state::AppState::load();
        if let Some(key) = state_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }
        if let Some(query) = app_state.last_query.clone() {
            app.panel = ListingsPanel::new(
                query,
                app.config.listings.debounce(),
                app.config.listings.columns(),
                app.gallery_options.placeholder.clone(),
            );
        }
        app.app_state = app_state;
        app.services = app.build_services();

        tracing::info!(
            base_url = %app.config.server.base_url,
            locale = %app.i18n.current_locale(),
            "starting"
        );

        let task = if flags.images.is_empty() {
            let effect = app.panel.start();
            update::handle_panel_effect(&mut app.update_context(), effect)
        } else {
            app.open_standalone(flags.images)
        };
        (app, task)
    }

    fn build_services(&mut self) -> Services {
        let server = &self.config.server;
        let client = match ListingsClient::new(server) {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::error!(%err, "cannot create listings client");
                self.notifications
                    .push(notifications::Notification::error("notification-server-config-error"));
                None
            }
        };
        let loader = match ImageLoader::new(&server.base_url, server.request_timeout()) {
            Ok(loader) => Some(loader),
            Err(err) => {
                tracing::error!(%err, "cannot create image loader");
                None
            }
        };
        Services { client, loader }
    }

    /// Shows `images` as a main-image gallery followed by a carousel.
    fn open_standalone(&mut self, images: Vec<String>) -> Task<Message> {
        let references: Vec<ImageRef> = images.into_iter().map(ImageRef::new).collect();
        let mut loads = Vec::new();

        if let Some(source) = GallerySource::from_images(references.clone()) {
            let (id, initial) = self.page.add_gallery(source, &GalleryLayout::full());
            self.page.focus(id);
            loads.extend(initial);
        }
        if references.len() > 1 {
            let slides = references
                .iter()
                .enumerate()
                .map(|(index, reference)| {
                    if index == 0 {
                        SlideSpec::eager(reference.clone())
                    } else {
                        SlideSpec::deferred(reference.clone())
                    }
                })
                .collect();
            let layout = GalleryLayout {
                counter: true,
                ..GalleryLayout::carousel()
            };
            let (_, initial) = self.page.add_gallery(GallerySource::Slides(slides), &layout);
            loads.extend(initial);
        }

        self.screen = Screen::Gallery;
        update::load_images(&mut self.update_context(), loads)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            panel: &mut self.panel,
            page: &mut self.page,
            detail: &mut self.detail,
            cache: &mut self.cache,
            services: &self.services,
            gallery_options: &self.gallery_options,
            app_state: &mut self.app_state,
            notifications: &mut self.notifications,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match (&self.screen, &self.detail) {
            (Screen::Detail, Some(detail)) => format!("{} - {app_name}", detail.listing.title),
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Listings(listings_message) => {
                update::handle_listings_message(&mut self.update_context(), listings_message)
            }
            Message::Gallery(page_message) => {
                if self.screen == Screen::Listings {
                    return Task::none();
                }
                update::handle_gallery_message(&mut self.update_context(), page_message)
            }
            Message::Favorite(favorite_message) => {
                update::handle_favorite_message(&mut self.update_context(), favorite_message)
            }
            Message::BackToListings => update::back_to_listings(&mut self.update_context()),
            Message::ImageFetched(reference, result) => {
                update::handle_image_fetched(&mut self.update_context(), reference, result)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            panel: &self.panel,
            page: &self.page,
            detail: self.detail.as_ref(),
            cache: &self.cache,
            categories: &self.config.listings.categories,
            notifications: &self.notifications,
        })
    }
}
