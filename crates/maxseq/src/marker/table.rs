use serde::Serialize;

/// Image used for a marker, sizes and anchor in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub url: &'static str,
    pub size: [u32; 2],
    pub anchor: [u32; 2],
}

impl Icon {
    const fn new(url: &'static str, size: [u32; 2], anchor: [u32; 2]) -> Self {
        Self { url, size, anchor }
    }

    const fn letter(url: &'static str) -> Self {
        Self::new(url, [16, 16], [8, 8])
    }
}

/// A recognized tag together with its icon.
///
/// `common` decides whether the tag gets a legend entry. It lives next to the
/// icon so the classifier and the legend always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagEntry {
    pub tag: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub common: bool,
}

impl TagEntry {
    const fn new(tag: &'static str, description: &'static str, icon: Icon, common: bool) -> Self {
        Self {
            tag,
            description,
            icon,
            common,
        }
    }

    const fn letter(tag: &'static str, url: &'static str) -> Self {
        Self::new(tag, "annotation", Icon::letter(url), true)
    }
}

pub static SIGNS: [TagEntry; 7] = [
    TagEntry::new(
        "city_limit",
        "Ortstafel",
        Icon::new("img/signs/city_limit.png", [12, 8], [6, 4]),
        true,
    ),
    TagEntry::new(
        "DE:205",
        "Vorfahrt gewähren",
        Icon::new("img/signs/DE205.png", [12, 11], [6, 5]),
        true,
    ),
    TagEntry::new(
        "DE:206",
        "Stop",
        Icon::new("img/signs/DE206.png", [12, 12], [6, 6]),
        true,
    ),
    TagEntry::new(
        "DE:250",
        "Verbot für Fahrzeuge aller Art",
        Icon::new("img/signs/DE250.png", [12, 12], [6, 6]),
        false,
    ),
    TagEntry::new(
        "DE:274",
        "Zulässige Höchstgeschwindigkeit",
        Icon::new("img/signs/DE274.png", [12, 12], [6, 6]),
        true,
    ),
    TagEntry::new(
        "DE:357",
        "Sackgasse",
        Icon::new("img/signs/DE357.png", [12, 12], [6, 6]),
        false,
    ),
    TagEntry::new(
        "DE:449",
        "Vorwegweiser auf Autobahnen",
        Icon::new("img/signs/DE449.png", [12, 12], [6, 6]),
        false,
    ),
];

/// Indexed by `letter - 'A'`.
pub static LETTERS: [TagEntry; 26] = [
    TagEntry::letter("A", "img/letters/a.png"),
    TagEntry::letter("B", "img/letters/b.png"),
    TagEntry::letter("C", "img/letters/c.png"),
    TagEntry::letter("D", "img/letters/d.png"),
    TagEntry::letter("E", "img/letters/e.png"),
    TagEntry::letter("F", "img/letters/f.png"),
    TagEntry::letter("G", "img/letters/g.png"),
    TagEntry::letter("H", "img/letters/h.png"),
    TagEntry::letter("I", "img/letters/i.png"),
    TagEntry::letter("J", "img/letters/j.png"),
    TagEntry::letter("K", "img/letters/k.png"),
    TagEntry::letter("L", "img/letters/l.png"),
    TagEntry::letter("M", "img/letters/m.png"),
    TagEntry::letter("N", "img/letters/n.png"),
    TagEntry::letter("O", "img/letters/o.png"),
    TagEntry::letter("P", "img/letters/p.png"),
    TagEntry::letter("Q", "img/letters/q.png"),
    TagEntry::letter("R", "img/letters/r.png"),
    TagEntry::letter("S", "img/letters/s.png"),
    TagEntry::letter("T", "img/letters/t.png"),
    TagEntry::letter("U", "img/letters/u.png"),
    TagEntry::letter("V", "img/letters/v.png"),
    TagEntry::letter("W", "img/letters/w.png"),
    TagEntry::letter("X", "img/letters/x.png"),
    TagEntry::letter("Y", "img/letters/y.png"),
    TagEntry::letter("Z", "img/letters/z.png"),
];

/// Fill colors for unrecognized tags.
pub static PALETTE: [&str; 9] = [
    "#f00", "#0f0", "#00f", "#ff0", "#f0f", "#0ff", "#000", "#fff", "#f70",
];
