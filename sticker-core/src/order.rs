use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Each page carries one sticker label per outer-table quadrant.
pub const LABELS_PER_PAGE: usize = 4;

/// Label-size classification driving sheet orientation and grid geometry.
/// Parsed from the literal strings "108", "48", "32" and "24"; anything
/// else resolves to [`SizeCategory::Other`], which shares the 48 profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SizeCategory {
    S108,
    #[default]
    S48,
    S32,
    S24,
    Other,
}

impl SizeCategory {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "108" => SizeCategory::S108,
            "48" => SizeCategory::S48,
            "32" => SizeCategory::S32,
            "24" => SizeCategory::S24,
            _ => SizeCategory::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SizeCategory::S108 => "108",
            SizeCategory::S48 => "48",
            SizeCategory::S32 => "32",
            SizeCategory::S24 => "24",
            SizeCategory::Other => "other",
        }
    }
}

impl From<String> for SizeCategory {
    fn from(s: String) -> Self {
        SizeCategory::parse(&s)
    }
}

impl From<SizeCategory> for String {
    fn from(c: SizeCategory) -> Self {
        c.as_str().to_string()
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized row of the uploaded order sheet. Field names match the
/// external tabular source exactly; immutable once parsed.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OrderRow {
    #[serde(rename = "order number")]
    pub order_number: String,
    #[serde(rename = "buyer name")]
    pub buyer_name: String,
    #[serde(rename = "sticker name")]
    pub sticker_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: SizeCategory,
}

/// All rows sharing one order number. Buyer, type and size come from the
/// group's first row (rows of a group are assumed to share a size
/// category — not enforced).
#[derive(Clone, Debug, PartialEq)]
pub struct OrderGroup {
    pub order_number: String,
    pub buyer_name: String,
    pub kind: String,
    pub size: SizeCategory,
    pub sticker_labels: Vec<String>,
}

impl OrderGroup {
    /// The group's labels in page-sized windows: up to
    /// [`LABELS_PER_PAGE`] labels per window, one window per page.
    pub fn label_pages(&self) -> impl Iterator<Item = &[String]> {
        self.sticker_labels.chunks(LABELS_PER_PAGE)
    }
}

/// Group rows by order number, preserving first-seen order.
pub fn group_orders(rows: &[OrderRow]) -> Vec<OrderGroup> {
    let mut groups: Vec<OrderGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for row in rows {
        if let Some(&i) = index.get(&row.order_number) {
            groups[i].sticker_labels.push(row.sticker_name.clone());
        } else {
            index.insert(row.order_number.clone(), groups.len());
            groups.push(OrderGroup {
                order_number: row.order_number.clone(),
                buyer_name: row.buyer_name.clone(),
                kind: row.kind.clone(),
                size: row.size,
                sticker_labels: vec![row.sticker_name.clone()],
            });
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(order: &str, sticker: &str, size: &str) -> OrderRow {
        OrderRow {
            order_number: order.to_string(),
            buyer_name: "Jane".to_string(),
            sticker_name: sticker.to_string(),
            kind: "name sticker".to_string(),
            size: SizeCategory::parse(size),
        }
    }

    #[test]
    fn size_parsing_and_fallback() {
        assert_eq!(SizeCategory::parse("108"), SizeCategory::S108);
        assert_eq!(SizeCategory::parse("48"), SizeCategory::S48);
        assert_eq!(SizeCategory::parse("32"), SizeCategory::S32);
        assert_eq!(SizeCategory::parse("24"), SizeCategory::S24);
        assert_eq!(SizeCategory::parse("999"), SizeCategory::Other);
        assert_eq!(SizeCategory::parse(""), SizeCategory::Other);
    }

    #[test]
    fn rows_deserialize_with_external_field_names() {
        let rows: Vec<OrderRow> = serde_json::from_str(
            r#"[{"order number":"A1","buyer name":"Jane","sticker name":"Cat","type":"name sticker","size":"48"},
                {"order number":"A1","buyer name":"Jane","sticker name":"Dog","type":"name sticker","size":"48"}]"#,
        )
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].sticker_name, "Cat");
        assert_eq!(rows[1].size, SizeCategory::S48);
    }

    #[test]
    fn grouping_preserves_first_seen_order() {
        let rows = vec![
            row("B2", "Fox", "108"),
            row("A1", "Cat", "48"),
            row("B2", "Owl", "108"),
            row("C3", "Bee", "24"),
            row("A1", "Dog", "48"),
        ];
        let groups = group_orders(&rows);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].order_number, "B2");
        assert_eq!(groups[0].sticker_labels, vec!["Fox", "Owl"]);
        assert_eq!(groups[1].order_number, "A1");
        assert_eq!(groups[1].sticker_labels, vec!["Cat", "Dog"]);
        assert_eq!(groups[2].order_number, "C3");
        assert_eq!(groups[2].size, SizeCategory::S24);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_orders(&[]).is_empty());
    }

    #[test]
    fn metadata_comes_from_first_row() {
        let mut second = row("A1", "Dog", "999");
        second.buyer_name = "Someone Else".to_string();
        let groups = group_orders(&[row("A1", "Cat", "48"), second]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].buyer_name, "Jane");
        assert_eq!(groups[0].size, SizeCategory::S48);
    }

    #[test]
    fn label_pages_chunk_by_four() {
        let mut g = group_orders(&[row("A1", "s0", "48")]).remove(0);
        g.sticker_labels = (0..9).map(|i| format!("s{i}")).collect();
        let pages: Vec<&[String]> = g.label_pages().collect();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].len(), 4);
        assert_eq!(pages[1].len(), 4);
        assert_eq!(pages[2].len(), 1);
        assert_eq!(pages[2][0], "s8");
    }
}
