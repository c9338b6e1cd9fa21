use crate::core::layout::BoxView;
use crate::core::selection::Outcome;
use crate::domain::model::Dataset;
use crate::domain::ports::DatasetStore;
use std::fmt::Write;

pub const UNKNOWN: &str = "???";
pub const NO_SELECTION: &str = "No selection";

/// Capitalises every letter that follows a non-letter, e.g. `mr. mime` → `Mr. Mime`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }
    out
}

pub fn dataset_label(dataset: &Dataset) -> String {
    format!(
        "{} ({})",
        title_case(dataset.dataset_id()),
        title_case(dataset.group_id())
    )
}

pub fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Cleared => NO_SELECTION.to_string(),
        Outcome::Located {
            rank,
            position,
            name,
        } => format!("{}: {} - {}", rank, title_case(name), position),
        Outcome::Vacant { rank, position, .. } => format!("{}: {} - {}", rank, UNKNOWN, position),
    }
}

const CELL_WIDTH: usize = 14;

fn fit(name: &str) -> String {
    let mut cell: String = name.chars().take(CELL_WIDTH - 2).collect();
    if name.chars().count() > CELL_WIDTH - 2 {
        cell.pop();
        cell.push('…');
    }
    cell
}

/// Text rendering of one box out of `total`; the highlighted slot is wrapped in `[ ]`.
pub fn render_box<S: DatasetStore>(view: &BoxView<'_>, total: usize, icons: Option<&S>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Box {} of {}", view.box_number, total);

    for row in &view.rows {
        for cell in row {
            let name = cell.entry.map(title_case).unwrap_or_else(|| UNKNOWN.to_string());
            let shown = if cell.highlighted {
                format!("[{}]", fit(&name))
            } else {
                format!(" {} ", fit(&name))
            };
            let _ = write!(out, "{:<width$}", shown, width = CELL_WIDTH);
        }
        out.push('\n');
    }

    if let Some(store) = icons {
        for cell in view.cells() {
            if let Some(entry) = cell.entry {
                let icon = store
                    .icon_path(entry)
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "-".to_string());
                let _ = writeln!(out, "{:>4}  {:<16} {}", cell.rank, entry, icon);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LocalStorage;
    use crate::core::position::{box_count, rank_to_position};

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("sword & shield - isle of armor"), "Sword & Shield - Isle Of Armor");
        assert_eq!(title_case("mr. mime"), "Mr. Mime");
        assert_eq!(title_case("ho-oh"), "Ho-Oh");
    }

    #[test]
    fn test_dataset_label() {
        let ds = Dataset::new("Sword & Shield - Isle of Armor", "Galar: Isle of Armor", ["slowpoke"]);
        assert_eq!(
            dataset_label(&ds),
            "Sword & Shield - Isle Of Armor (Galar: Isle Of Armor)"
        );
    }

    #[test]
    fn test_describe() {
        let located = Outcome::Located {
            rank: 31,
            position: rank_to_position(31),
            name: "mr. mime".into(),
        };
        assert_eq!(describe(&located), "31: Mr. Mime - Box 2, Row 1, Column 1");

        let vacant = Outcome::Vacant {
            rank: 99,
            position: rank_to_position(99),
            len: 3,
        };
        assert_eq!(describe(&vacant), "99: ??? - Box 4, Row 2, Column 3");
        assert_eq!(describe(&Outcome::Cleared), NO_SELECTION);
    }

    #[test]
    fn test_render_box_marks_highlight_and_gaps() {
        let ds = Dataset::new("kanto", "kanto", ["bulbasaur", "ivysaur"]);
        let view = BoxView::for_box(&ds, 1, Some(2));
        let text = render_box::<LocalStorage>(&view, box_count(ds.len()), None);

        assert!(text.starts_with("Box 1 of 1\n"));
        assert!(text.contains("[Ivysaur]"));
        assert!(text.contains(" Bulbasaur "));
        assert_eq!(text.matches(UNKNOWN).count(), 28);
        assert_eq!(text.lines().count(), 6);
    }
}
