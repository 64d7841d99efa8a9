//! Web runtime: finds the page elements, mounts the components and keeps
//! them alive for the page's lifetime.

use crate::launcher::PageSettings;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use vitrine_core::{AutoplayHandle, ScrollHeader, SharedSlider, Slider};
use vitrine_platform_web::{query_all, DomElement, WebHost, WebTimers};
use wasm_bindgen::prelude::*;

/// Everything a mounted page holds on to. Dropping it detaches every
/// listener and stops autoplay.
#[derive(Debug)]
pub struct MountedPage {
    /// Header toggler, when the header element exists.
    pub header: Option<Rc<ScrollHeader<DomElement>>>,
    /// Slider, when its track and dots exist.
    pub slider: Option<SharedSlider<DomElement, DomElement>>,
    /// Autoplay handle, when autoplay is configured.
    pub autoplay: Option<AutoplayHandle>,
    // Owns the DOM listeners; dropping it detaches them.
    _host: WebHost,
}

thread_local! {
    static MOUNTED: RefCell<Option<MountedPage>> = const { RefCell::new(None) };
}

/// Mounts the page now, or on `DOMContentLoaded` while the document is
/// still loading.
pub fn run(settings: PageSettings) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no global window exists")?;
    let document = window.document().ok_or("should have a document on window")?;

    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", move |_event| {
            if let Err(err) = mount_and_keep(&settings) {
                log::error!("failed to mount page behaviors: {err:?}");
            }
        })
        .forget();
        Ok(())
    } else {
        mount_and_keep(&settings)
    }
}

fn mount_and_keep(settings: &PageSettings) -> Result<(), JsValue> {
    let page = mount(settings)?;
    MOUNTED.with(|mounted| {
        // A previous page, if any, is dropped and detached here.
        *mounted.borrow_mut() = Some(page);
    });
    Ok(())
}

/// Drops the mounted page, detaching its listeners and stopping autoplay.
pub fn unmount() {
    MOUNTED.with(|mounted| mounted.borrow_mut().take());
}

/// Queries the configured elements and attaches both components.
///
/// A missing header or slider only disables that component; the other one
/// is still mounted.
pub fn mount(settings: &PageSettings) -> Result<MountedPage, JsValue> {
    let window = web_sys::window().ok_or("no global window exists")?;
    let document = window.document().ok_or("should have a document on window")?;

    let header_element = document.query_selector(&settings.header_selector)?;
    let track_element = document.get_element_by_id(&settings.track_id);
    let dot_elements = query_all(&document, &settings.dot_selector)?;

    let mut host = WebHost::new(window, document)
        .with_slider_elements(track_element.clone(), dot_elements.clone());

    let header = match header_element {
        Some(element) => Some(
            ScrollHeader::new(DomElement::new(element), settings.header.clone())
                .attach(&mut host),
        ),
        None => {
            log::warn!(
                "header '{}' not found; scroll styling disabled",
                settings.header_selector
            );
            None
        }
    };

    let slider = Slider::new(
        track_element.map(DomElement::new),
        dot_elements.into_iter().map(DomElement::new).collect(),
        settings.slider.clone(),
    );
    let (slider, autoplay) = match slider {
        Ok(slider) => {
            let slider = slider.into_shared();
            Slider::attach(&slider, &mut host);
            let autoplay = settings
                .autoplay
                .map(|interval| Slider::start_autoplay(&slider, &mut WebTimers, interval));
            (Some(slider), autoplay)
        }
        Err(err) => {
            log::error!("slider elements not found: {err}");
            (None, None)
        }
    };

    Ok(MountedPage {
        header,
        slider,
        autoplay,
        _host: host,
    })
}
