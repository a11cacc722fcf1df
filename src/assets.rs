//! Sprite assets with explicit readiness state
//!
//! Images load fire-and-forget; the renderer reads [`AssetState`]
//! synchronously every frame and falls back to flat-color rectangles until a
//! sprite is `Ready`. A failed load is not an error, just a permanent
//! fallback.

/// Lifecycle of one image asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetState {
    /// Load requested, completion unknown
    Pending,
    /// Decoded and drawable
    Ready,
    /// Load errored; render the fallback forever
    Failed,
}

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::HtmlImageElement;

    use super::AssetState;

    /// One bitmap sprite backed by an `<img>` element
    pub struct Sprite {
        element: HtmlImageElement,
        state: Rc<Cell<AssetState>>,
    }

    impl Sprite {
        /// Begin loading `src`. Returns immediately; completion flips the
        /// shared state from its onload/onerror callbacks.
        pub fn load(src: &str) -> Result<Self, JsValue> {
            let element = HtmlImageElement::new()?;
            let state = Rc::new(Cell::new(AssetState::Pending));

            {
                let state = state.clone();
                let onload = Closure::<dyn FnMut()>::new(move || {
                    state.set(AssetState::Ready);
                });
                element.set_onload(Some(onload.as_ref().unchecked_ref()));
                onload.forget();
            }

            {
                let state = state.clone();
                let src = src.to_owned();
                let onerror = Closure::<dyn FnMut()>::new(move || {
                    log::warn!("sprite {src} failed to load, using flat-color fallback");
                    state.set(AssetState::Failed);
                });
                element.set_onerror(Some(onerror.as_ref().unchecked_ref()));
                onerror.forget();
            }

            element.set_src(src);
            Ok(Self { element, state })
        }

        pub fn state(&self) -> AssetState {
            self.state.get()
        }

        pub fn element(&self) -> &HtmlImageElement {
            &self.element
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::Sprite;
