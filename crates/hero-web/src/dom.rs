use crate::constants::SVG_NS;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Register a window listener that lives for the rest of the page.
pub fn add_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn element(
    document: &web::Document,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = document.create_element(tag).map_err(js_err)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    el.dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow::anyhow!("<{}> is not an HTML element", tag))
}

/// Create a child element and append it to `parent`.
pub fn child(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = element(document, tag, class)?;
    parent.append_child(&el).map_err(js_err)?;
    Ok(el)
}

/// Create a child element holding `text`.
pub fn text(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    class: &str,
    text: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = child(document, parent, tag, class)?;
    el.set_text_content(Some(text));
    Ok(el)
}

/// Inline SVG with a single stroked path.
pub fn svg_path(
    document: &web::Document,
    parent: &web::Element,
    view_box: &str,
    path: &str,
) -> anyhow::Result<()> {
    let svg = document
        .create_element_ns(Some(SVG_NS), "svg")
        .map_err(js_err)?;
    svg.set_attribute("viewBox", view_box).map_err(js_err)?;
    svg.set_attribute("class", "hero-chart").map_err(js_err)?;
    let p = document
        .create_element_ns(Some(SVG_NS), "path")
        .map_err(js_err)?;
    p.set_attribute("d", path).map_err(js_err)?;
    svg.append_child(&p).map_err(js_err)?;
    parent.append_child(&svg).map_err(js_err)?;
    Ok(())
}

fn head(document: &web::Document) -> anyhow::Result<web::HtmlHeadElement> {
    document
        .head()
        .ok_or_else(|| anyhow::anyhow!("document has no <head>"))
}

/// Add the hero stylesheet unless an earlier mount already did.
pub fn install_stylesheet(document: &web::Document, id: &str, css: &str) -> anyhow::Result<()> {
    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }
    let style = document.create_element("style").map_err(js_err)?;
    style.set_id(id);
    style.set_text_content(Some(css));
    head(document)?.append_child(&style).map_err(js_err)?;
    Ok(())
}

/// Load an ES module script once per document. Removing the hero leaves it
/// in place; custom elements cannot be unregistered anyway.
pub fn install_module_script(document: &web::Document, id: &str, src: &str) -> anyhow::Result<()> {
    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }
    let script = document.create_element("script").map_err(js_err)?;
    script.set_id(id);
    script.set_attribute("type", "module").map_err(js_err)?;
    script.set_attribute("src", src).map_err(js_err)?;
    head(document)?.append_child(&script).map_err(js_err)?;
    log::debug!("[dom] loading {}", src);
    Ok(())
}

#[inline]
pub fn set_transform(el: &web::HtmlElement, css: &str) {
    _ = el.style().set_property("transform", css);
}
