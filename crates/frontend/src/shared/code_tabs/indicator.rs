use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlElement;

/// Position of the selected-tab indicator, in CSS pixels
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct IndicatorGeometry {
    pub offset_x: f64,
    pub width: f64,
}

impl IndicatorGeometry {
    /// Reads the tab's layout box relative to its offset parent (the tab list).
    pub fn from_element(element: &HtmlElement) -> Self {
        Self {
            offset_x: f64::from(element.offset_left()),
            width: f64::from(element.offset_width()),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: translateX({}px); width: {}px;",
            self.offset_x, self.width
        )
    }
}

/// Runs `callback` once the document's fonts have finished loading.
///
/// Tab widths depend on text metrics, so geometry read before the web fonts
/// arrive is stale. Without a `FontFaceSet` the callback runs right away.
pub fn on_fonts_ready<F>(callback: F)
where
    F: FnOnce() + 'static,
{
    let ready: Option<js_sys::Promise> = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.fonts().ready().ok());

    spawn_local(async move {
        if let Some(promise) = ready {
            if let Err(err) = JsFuture::from(promise).await {
                log::debug!("fonts.ready rejected: {:?}", err);
            }
        }
        callback();
    });
}
