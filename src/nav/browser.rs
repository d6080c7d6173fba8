//! Browser probe mechanisms: `fetch` HEAD via `gloo-net`, an `<img>` load,
//! and `gloo-timers` for the deadline.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::probe::{Clock, NavigationProber, ProbeError, ProbeTransport};
use crate::config::ProbeConfig;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserProbe;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

/// Prober wired to the real browser.
#[must_use]
pub fn browser_prober(config: ProbeConfig) -> NavigationProber<BrowserProbe, BrowserClock> {
    NavigationProber::new(BrowserProbe, BrowserClock, config)
}

#[async_trait(?Send)]
impl ProbeTransport for BrowserProbe {
    async fn head(&self, url: &str) -> Result<(), ProbeError> {
        if web_sys::window().is_none() {
            return Err(ProbeError::Unavailable);
        }
        gloo_net::http::Request::get(url)
            .method(gloo_net::http::Method::HEAD)
            .cache(web_sys::RequestCache::NoStore)
            .credentials(web_sys::RequestCredentials::SameOrigin)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| ProbeError::Failed(e.to_string()))
    }

    async fn load_image(&self, url: &str) -> Result<(), ProbeError> {
        let img = web_sys::HtmlImageElement::new().map_err(|_| ProbeError::Unavailable)?;
        let (tx, rx) = oneshot::channel::<Result<(), ProbeError>>();
        let tx = Rc::new(RefCell::new(Some(tx)));

        let on_load = {
            let tx = tx.clone();
            Closure::<dyn FnMut()>::new(move || {
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(Ok(()));
                }
            })
        };
        let on_error = {
            let tx = tx.clone();
            Closure::<dyn FnMut()>::new(move || {
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(Err(ProbeError::Failed("image failed to load".to_owned())));
                }
            })
        };
        img.set_onload(Some(on_load.as_ref().unchecked_ref()));
        img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        let _handlers = ImageHandlers { img: img.clone(), _on_load: on_load, _on_error: on_error };

        img.set_src(url);
        rx.await
            .unwrap_or_else(|_| Err(ProbeError::Failed("image probe abandoned".to_owned())))
    }
}

/// Detaches the image callbacks when the probe settles or is dropped.
struct ImageHandlers {
    img: web_sys::HtmlImageElement,
    _on_load: Closure<dyn FnMut()>,
    _on_error: Closure<dyn FnMut()>,
}

impl Drop for ImageHandlers {
    fn drop(&mut self) {
        self.img.set_onload(None);
        self.img.set_onerror(None);
    }
}

#[async_trait(?Send)]
impl Clock for BrowserClock {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}
