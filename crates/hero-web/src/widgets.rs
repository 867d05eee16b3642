//! Builds the hero section: background scene embed, heading and the
//! parallax stage with one container per layer.

use crate::constants::{SCENE_URL, SCENE_VIEWER_TAG};
use crate::dom;
use crate::transform::anchor_style;
use hero_core::content::{self, AutomationIcon};
use hero_core::{ItemPlacement, ItemTransform, LayerKind, HERO_LAYERS};
use web_sys as web;

/// One element whose transform follows its layer's smoothed offset.
pub struct AnimatedItem {
    pub layer: LayerKind,
    pub tilt: bool,
    pub placement: ItemPlacement,
    pub el: web::HtmlElement,
    pub last: Option<ItemTransform>,
}

pub struct HeroDom {
    pub section: web::HtmlElement,
    pub items: Vec<AnimatedItem>,
}

pub fn build_hero(document: &web::Document) -> anyhow::Result<HeroDom> {
    let section = dom::element(document, "section", "hero-section")?;

    let scene = dom::child(document, &section, "div", "hero-scene")?;
    let viewer = document.create_element(SCENE_VIEWER_TAG).map_err(dom::js_err)?;
    viewer.set_attribute("url", SCENE_URL).map_err(dom::js_err)?;
    scene.append_child(&viewer).map_err(dom::js_err)?;
    dom::child(document, &section, "div", "hero-glow")?;

    let body = dom::child(document, &section, "div", "hero-content")?;
    let heading = dom::child(document, &body, "div", "hero-heading")?;
    dom::text(document, &heading, "h1", "", content::HEADING)?;
    dom::text(document, &heading, "p", "", content::SUBHEADING)?;

    let stage = dom::child(document, &body, "div", "hero-stage")?;
    let mut items = Vec::new();
    for spec in HERO_LAYERS.iter() {
        let layer = dom::child(
            document,
            &stage,
            "div",
            &format!("hero-layer hero-layer--{}", spec.kind.name()),
        )?;
        let mut builder = LayerBuilder {
            document,
            layer: &layer,
            kind: spec.kind,
            tilt: spec.tilt,
            items: &mut items,
        };
        match spec.kind {
            LayerKind::Backdrop => builder.backdrop()?,
            LayerKind::Documents => builder.documents()?,
            LayerKind::Dashboard => builder.dashboard()?,
            LayerKind::HeroPanel => builder.hero_panel()?,
            LayerKind::AutomationIcons => builder.automation_icons()?,
        }
    }
    log::debug!("[hero] built {} animated items", items.len());

    Ok(HeroDom { section, items })
}

struct LayerBuilder<'a> {
    document: &'a web::Document,
    layer: &'a web::HtmlElement,
    kind: LayerKind,
    tilt: bool,
    items: &'a mut Vec<AnimatedItem>,
}

impl<'a> LayerBuilder<'a> {
    /// Positioned item container registered for per-frame transforms.
    fn item(&mut self, class: &str, placement: ItemPlacement) -> anyhow::Result<web::HtmlElement> {
        let el = dom::child(self.document, self.layer, "div", &format!("hero-item {}", class))?;
        let anchor = anchor_style(&placement);
        if !anchor.is_empty() {
            el.set_attribute("style", &anchor).map_err(dom::js_err)?;
        }
        self.items.push(AnimatedItem {
            layer: self.kind,
            tilt: self.tilt,
            placement,
            el: el.clone(),
            last: None,
        });
        Ok(el)
    }

    fn text(
        &self,
        parent: &web::Element,
        tag: &str,
        class: &str,
        text: &str,
    ) -> anyhow::Result<()> {
        dom::text(self.document, parent, tag, class, text).map(|_| ())
    }

    fn row(
        &self,
        parent: &web::Element,
        left: (&str, &str),
        right: (&str, &str),
    ) -> anyhow::Result<()> {
        let row = dom::child(self.document, parent, "div", "hero-row")?;
        self.text(&row, "span", left.0, left.1)?;
        self.text(&row, "span", right.0, right.1)
    }

    fn backdrop(&mut self) -> anyhow::Result<()> {
        let el = self.item("hero-fill", ItemPlacement::FILL)?;
        dom::child(self.document, &el, "div", "hero-glow-shape")?;
        Ok(())
    }

    fn documents(&mut self) -> anyhow::Result<()> {
        for card in content::invoice_cards() {
            let el = self.item("hero-card hero-invoice", card.placement)?;
            self.row(&el, ("hero-muted", card.title.as_str()), ("hero-accent", "PDF"))?;
            dom::child(self.document, &el, "div", "hero-skeleton")?
                .set_attribute("style", "width: 83%;")
                .map_err(dom::js_err)?;
            dom::child(self.document, &el, "div", "hero-skeleton")?
                .set_attribute("style", "width: 66%;")
                .map_err(dom::js_err)?;
            self.row(&el, ("hero-muted", "Iznos"), ("hero-strong", card.amount.as_str()))?;
            self.text(&el, "div", "hero-accent", "PDV obračun")?;
        }
        Ok(())
    }

    fn dashboard(&mut self) -> anyhow::Result<()> {
        let bars = self.item("hero-card hero-widget", content::BAR_CHART_PLACEMENT)?;
        self.text(&bars, "div", "hero-muted", content::BAR_CHART_TITLE)?;
        let chart = dom::child(self.document, &bars, "div", "hero-bars")?;
        for h in content::BAR_HEIGHTS_PX {
            dom::child(self.document, &chart, "div", "hero-bar")?
                .set_attribute("style", &format!("height: {}px;", h))
                .map_err(dom::js_err)?;
        }

        let flow = self.item("hero-card hero-widget", content::CASH_FLOW_PLACEMENT)?;
        self.text(&flow, "div", "hero-muted", content::CASH_FLOW_TITLE)?;
        dom::svg_path(
            self.document,
            &flow,
            content::CASH_FLOW_VIEWBOX,
            content::CASH_FLOW_PATH,
        )?;
        self.text(&flow, "div", "hero-faint", content::CASH_FLOW_CAPTION)?;

        let ai = self.item("hero-card hero-widget", content::AI_PLACEMENT)?;
        self.text(&ai, "div", "hero-muted", content::AI_TITLE)?;
        let list = dom::child(self.document, &ai, "ul", "hero-list")?;
        for rec in content::AI_RECOMMENDATIONS {
            self.text(&list, "li", "", rec)?;
        }

        let obligations = self.item("hero-card hero-widget", content::OBLIGATIONS_PLACEMENT)?;
        self.text(&obligations, "div", "hero-muted", content::OBLIGATIONS_TITLE)?;
        let last = content::OBLIGATIONS.len() - 1;
        for (i, (label, value)) in content::OBLIGATIONS.iter().enumerate() {
            let value_class = if i == last { "hero-ok" } else { "hero-strong" };
            self.row(&obligations, ("hero-faint", *label), (value_class, *value))?;
        }
        Ok(())
    }

    fn hero_panel(&mut self) -> anyhow::Result<()> {
        let p = &content::HERO_PANEL;
        let panel = self.item("hero-card hero-panel", content::HERO_PANEL_PLACEMENT)?;

        let header = dom::child(self.document, &panel, "div", "hero-row")?;
        let who = dom::child(self.document, &header, "div", "")?;
        self.text(&who, "div", "hero-muted", p.label)?;
        self.text(&who, "div", "hero-strong", p.client)?;
        let amount = dom::child(self.document, &header, "div", "")?;
        self.text(&amount, "div", "hero-faint", p.amount_label)?;
        self.text(&amount, "div", "hero-strong", &content::format_eur(p.amount))?;

        let grid = dom::child(self.document, &panel, "div", "hero-panel-grid")?;
        let flow = dom::child(self.document, &grid, "div", "hero-card")?;
        self.text(&flow, "div", "hero-muted", p.flow_title)?;
        dom::svg_path(self.document, &flow, p.flow_viewbox, p.flow_path)?;
        let note = dom::child(self.document, &grid, "div", "hero-card")?;
        self.text(&note, "div", "hero-muted", p.notification_title)?;
        self.text(&note, "div", "", p.notification)?;
        self.text(&note, "div", "hero-faint", p.notification_age)?;

        let assistant = dom::child(self.document, &panel, "div", "hero-assistant")?;
        self.text(&assistant, "span", "hero-icon", AutomationIcon::Bot.glyph())?;
        self.text(&assistant, "div", "", p.assistant)
    }

    fn automation_icons(&mut self) -> anyhow::Result<()> {
        for (icon, placement) in content::automation_icons() {
            let el = self.item("hero-icon", placement)?;
            el.set_text_content(Some(icon.glyph()));
            el.set_title(icon.label());
            el.set_attribute("aria-label", icon.label())
                .map_err(dom::js_err)?;
        }
        Ok(())
    }
}
