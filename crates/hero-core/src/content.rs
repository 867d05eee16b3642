//! Static mock content of the landing hero: invoice cards, dashboard
//! widgets, the main panel and the automation icons.

use crate::scene::{document_nudge, icon_nudge, ItemPlacement};

pub const HEADING: &str = "Inteligentni knjigovodstveni centar";
pub const SUBHEADING: &str = "Jedinstven AI sistem koji automatski organizuje finansije, dokumente i obaveze — profesionalno, brzo i jednostavno.";

// ---------------- Documents layer ----------------

pub const INVOICE_CARD_COUNT: usize = 3;
pub const FIRST_INVOICE_NUMBER: u32 = 1003;
const INVOICE_BASE_AMOUNT: f32 = 420.0;
const INVOICE_AMOUNT_STEP: f32 = 57.0;
const INVOICE_ANCHORS: [(f32, f32, f32); INVOICE_CARD_COUNT] =
    [(10.0, 18.0, -4.0), (75.0, 22.0, 6.0), (22.0, 70.0, 3.0)];

#[derive(Clone, Debug, PartialEq)]
pub struct InvoiceCard {
    pub title: String,
    pub amount: String,
    pub placement: ItemPlacement,
}

pub fn invoice_cards() -> Vec<InvoiceCard> {
    INVOICE_ANCHORS
        .iter()
        .enumerate()
        .map(|(i, &(left, top, rot))| {
            let nudge = document_nudge(i);
            InvoiceCard {
                title: format!("Faktura #{}", FIRST_INVOICE_NUMBER + i as u32),
                amount: format_eur(INVOICE_BASE_AMOUNT + i as f32 * INVOICE_AMOUNT_STEP),
                placement: ItemPlacement::at(left, top)
                    .with_nudge(nudge.x, nudge.y)
                    .with_rotation(rot),
            }
        })
        .collect()
}

/// `€` prefix, two decimals, comma thousands separator.
pub fn format_eur(amount: f32) -> String {
    let cents = (amount as f64 * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}€{}.{:02}", sign, grouped, cents % 100)
}

// ---------------- Dashboard layer ----------------

pub const BAR_CHART_TITLE: &str = "Prihodi vs Rashodi";
pub const BAR_HEIGHTS_PX: [u32; 7] = [18, 26, 12, 30, 22, 34, 28];
pub const BAR_CHART_PLACEMENT: ItemPlacement = ItemPlacement::at(8.0, 46.0);

pub const CASH_FLOW_TITLE: &str = "Tok gotovine";
pub const CASH_FLOW_CAPTION: &str = "+12% ovaj mjesec";
pub const CASH_FLOW_PATH: &str =
    "M0,60 C40,40 60,65 100,42 C130,28 160,50 200,32 C220,24 240,36 240,36";
pub const CASH_FLOW_VIEWBOX: &str = "0 0 240 80";
pub const CASH_FLOW_PLACEMENT: ItemPlacement = ItemPlacement::at(68.0, 56.0);

pub const AI_TITLE: &str = "AI preporuke";
pub const AI_RECOMMENDATIONS: [&str; 3] = [
    "Kategorizuj 5 novih troškova",
    "Pošalji podsjetnik za fakturu #1082",
    "Optimizuj PDV odbitak",
];
pub const AI_PLACEMENT: ItemPlacement = ItemPlacement::at(20.0, 12.0);

pub const OBLIGATIONS_TITLE: &str = "Pregled obaveza";
pub const OBLIGATIONS: [(&str, &str); 3] = [
    ("Fakture za naplatu", "3"),
    ("Neplaćeni troškovi", "2"),
    ("PDV prijava", "u toku"),
];
pub const OBLIGATIONS_PLACEMENT: ItemPlacement = ItemPlacement::at(56.0, 16.0);

// ---------------- Hero panel layer ----------------

pub struct HeroPanel {
    pub label: &'static str,
    pub client: &'static str,
    pub amount_label: &'static str,
    pub amount: f32,
    pub flow_title: &'static str,
    pub flow_path: &'static str,
    pub flow_viewbox: &'static str,
    pub notification_title: &'static str,
    pub notification: &'static str,
    pub notification_age: &'static str,
    pub assistant: &'static str,
}

pub const HERO_PANEL: HeroPanel = HeroPanel {
    label: "Faktura",
    client: "ACME d.o.o.",
    amount_label: "Iznos",
    amount: 1248.0,
    flow_title: "Tok fakturisanja",
    flow_path: "M0,70 C40,50 60,75 100,52 C130,38 160,60 200,42 C220,34 260,46 280,46",
    flow_viewbox: "0 0 280 90",
    notification_title: "Notifikacija",
    notification: "Klijent je otvorio fakturu",
    notification_age: "prije 2m",
    assistant: "AI asistent: Predlažem automatizaciju knjiženja za 5 novih troškova.",
};

pub const HERO_PANEL_PLACEMENT: ItemPlacement = ItemPlacement::at(50.0, 50.0).centered();

// ---------------- Automation icons layer ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutomationIcon {
    FileText,
    Bot,
    Tags,
    Calculator,
    AlertTriangle,
    Bell,
    CalendarCheck,
}

impl AutomationIcon {
    /// Accessible label for the icon.
    pub fn label(self) -> &'static str {
        match self {
            AutomationIcon::FileText => "Dokumenti",
            AutomationIcon::Bot => "AI asistent",
            AutomationIcon::Tags => "Kategorije",
            AutomationIcon::Calculator => "Obračun",
            AutomationIcon::AlertTriangle => "Upozorenja",
            AutomationIcon::Bell => "Podsjetnici",
            AutomationIcon::CalendarCheck => "Rokovi",
        }
    }

    /// Glyph used when no icon font is loaded.
    pub fn glyph(self) -> &'static str {
        match self {
            AutomationIcon::FileText => "📄",
            AutomationIcon::Bot => "🤖",
            AutomationIcon::Tags => "🏷",
            AutomationIcon::Calculator => "🧮",
            AutomationIcon::AlertTriangle => "⚠",
            AutomationIcon::Bell => "🔔",
            AutomationIcon::CalendarCheck => "📅",
        }
    }
}

const ICON_ANCHORS: [(AutomationIcon, f32, f32); 7] = [
    (AutomationIcon::FileText, 6.0, 30.0),
    (AutomationIcon::Bot, 14.0, 60.0),
    (AutomationIcon::Tags, 88.0, 34.0),
    (AutomationIcon::Calculator, 82.0, 68.0),
    (AutomationIcon::AlertTriangle, 46.0, 10.0),
    (AutomationIcon::Bell, 54.0, 86.0),
    (AutomationIcon::CalendarCheck, 28.0, 84.0),
];

pub fn automation_icons() -> Vec<(AutomationIcon, ItemPlacement)> {
    ICON_ANCHORS
        .iter()
        .enumerate()
        .map(|(i, &(icon, left, top))| {
            let nudge = icon_nudge(i);
            (icon, ItemPlacement::at(left, top).with_nudge(nudge.x, nudge.y))
        })
        .collect()
}
