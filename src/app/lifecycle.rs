//! Application lifecycle - initialization and the per-frame tick.

use super::state::{
    Atelier, CarouselState, EnquiryState, GalleryState, LightboxState, NavigationState,
    SettingsState, SystemState, UiState,
};
use crate::carousel::ScrollTrack;
use crate::catalog::Catalog;
use crate::enquiry::EnquiryForm;
use crate::notifications::ToastManager;
use crate::perf::PerfMonitor;
use crate::settings::Settings;
use crate::types::{AppView, CategoryFilter};
use gpui::*;

impl Atelier {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let settings = Settings::load();
        let catalog = Catalog::load_or_builtin(settings.catalog_path.as_deref());

        Self {
            navigation: NavigationState {
                view: AppView::Home,
            },
            carousel: CarouselState {
                track: ScrollTrack::new(settings.tuning.sensitivity),
                region: None,
            },
            gallery: GalleryState {
                catalog,
                filter: CategoryFilter::All,
            },
            lightbox: LightboxState {
                current: None,
                hint_until: None,
                backdrop_clicked: false,
            },
            enquiry: EnquiryState {
                artwork_id: None,
                form: EnquiryForm::default(),
                name_input: None,
                email_input: None,
                phone_input: None,
                message_input: None,
                errors: Vec::new(),
                backdrop_clicked: false,
            },
            settings: SettingsState { data: settings },
            ui: UiState {
                toast_manager: ToastManager::new(),
            },
            system: SystemState {
                carousel_focus: cx.focus_handle(),
                perf_monitor: PerfMonitor::new(),
                frame_queued: false,
            },
        }
    }

    /// Returns true while something time-driven needs more frames: an eased
    /// scroll, live toasts, or the lightbox hint countdown.
    pub fn needs_frames(&self) -> bool {
        self.carousel.track.is_animating()
            || !self.ui.toast_manager.is_empty()
            || self.lightbox.hint_until.is_some()
    }

    /// Queue a frame-tick callback if one isn't already pending.
    pub fn request_frame(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.system.frame_queued {
            return;
        }
        self.system.frame_queued = true;
        let entity = cx.entity();
        window.on_next_frame(move |window, cx| {
            entity.update(cx, |this, cx| {
                this.system.frame_queued = false;
                this.tick(window, cx);
            });
        });
    }

    /// Advance time-driven state one frame: eased scroll, toast expiry, and
    /// the lightbox hint. Notifies and re-queues while anything is live.
    fn tick(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.system.perf_monitor.begin_frame();

        let mut changed = self.carousel.track.tick();

        if self.ui.toast_manager.prune() {
            changed = true;
        }

        if let Some(until) = self.lightbox.hint_until {
            if std::time::Instant::now() >= until {
                self.lightbox.hint_until = None;
                changed = true;
            }
        }

        self.system.perf_monitor.end_frame();

        if changed {
            cx.notify();
        }
        if self.needs_frames() {
            self.request_frame(window, cx);
        }
    }
}
