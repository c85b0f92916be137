//! Hero banner with the opening video.

use super::{ICON_CARET_RIGHT, ICON_PAUSE, ICON_PLAY, Icon};
use crate::HeroConfig;
use leptos::html::Video;
use leptos::prelude::*;
use surover_model::content::{HERO_DESCRIPTION, HERO_TITLE};
use surover_model::{MediaControl, PlaybackToggle};

/// `<video>` element as seen by [`PlaybackToggle`].
struct VideoHandle(web_sys::HtmlVideoElement);

impl MediaControl for VideoHandle {
    fn play(&self) {
        // Rejected promises (autoplay policy) are ignored.
        let _ = self.0.play();
    }

    fn pause(&self) {
        let _ = self.0.pause();
    }
}

/// Initial toggle state for a hero configuration.
pub(crate) fn initial_playback(config: &HeroConfig) -> PlaybackToggle {
    let toggle = PlaybackToggle::new(config.autoplay);
    match config.pause_at_secs {
        Some(secs) => toggle.with_pause_at(secs),
        None => toggle,
    }
}

/// Full-height banner: muted video, headline, play/pause button.
#[component]
pub fn Hero(config: HeroConfig) -> impl IntoView {
    let video_ref = NodeRef::<Video>::new();
    let playback = RwSignal::new(initial_playback(&config));

    let on_toggle = move |_| {
        // Without a mounted element there is nothing to drive.
        if let Some(video) = video_ref.get() {
            let media = VideoHandle(video);
            playback.update(|p| {
                p.toggle(&media);
            });
        }
    };

    let on_time_update = move |_| {
        if let Some(video) = video_ref.get_untracked() {
            let now = video.current_time();
            let mut state = playback.get_untracked();
            if state.on_time_update(now, &VideoHandle(video)) {
                playback.set(state);
            }
        }
    };

    view! {
        <section class="hero">
            <video
                node_ref=video_ref
                class="hero-video"
                src=config.video
                autoplay=config.autoplay
                muted=true
                playsinline=true
                on:timeupdate=on_time_update
            ></video>
            <div class="hero-shade"></div>
            <div class="container hero-content">
                <h1 class="hero-title">{HERO_TITLE}</h1>
                <p class="hero-description">{HERO_DESCRIPTION}</p>
                <div class="hero-actions">
                    <button class="btn btn-primary" data-role="playback" on:click=on_toggle>
                        {move || {
                            let icon = if playback.get().is_playing() { ICON_PAUSE } else { ICON_PLAY };
                            view! { <Icon path=icon size="16" class="btn-icon" /> }
                        }}
                        {move || playback.get().label()}
                    </button>
                    <a href="#about" class="hero-link">
                        "What is a rover?"
                        <Icon path=ICON_CARET_RIGHT size="16" />
                    </a>
                </div>
            </div>
        </section>
    }
}
