//! Password checklist widget
//!
//! Renders one row per criterion: a bold ✔ or ✘ mark followed by the label,
//! green when satisfied and red otherwise.

use iced::{
    widget::{row, text, Column},
    Alignment, Color, Element, Font,
};

use create_user_shared::CriterionStatus;

use crate::ui::theme::{
    utils::typography::{self, BOLD, SEMIBOLD},
    ERROR_RED, SUCCESS_GREEN,
};

/// Mark shown in front of a row
pub fn mark(satisfied: bool) -> &'static str {
    if satisfied {
        "✔"
    } else {
        "✘"
    }
}

/// Row color
pub fn row_color(satisfied: bool) -> Color {
    if satisfied {
        SUCCESS_GREEN
    } else {
        ERROR_RED
    }
}

/// Build the checklist for the given criteria
pub fn criteria_list<'a, Message: 'a>(criteria: &[CriterionStatus]) -> Element<'a, Message> {
    let rows = criteria.iter().map(|criterion| -> Element<'a, Message> {
        let color = row_color(criterion.satisfied);
        let label_font = if criterion.satisfied { SEMIBOLD } else { Font::DEFAULT };

        row![
            text(mark(criterion.satisfied))
                .font(BOLD)
                .size(typography::LABEL_SIZE)
                .color(color),
            text(criterion.label)
                .font(label_font)
                .size(typography::LABEL_SIZE)
                .color(color),
        ]
        .spacing(6)
        .align_y(Alignment::Center)
        .into()
    });

    Column::with_children(rows)
        .spacing(4)
        .padding([0, 16])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_and_colors() {
        assert_eq!(mark(true), "✔");
        assert_eq!(mark(false), "✘");
        assert_eq!(row_color(true), SUCCESS_GREEN);
        assert_eq!(row_color(false), ERROR_RED);
    }
}
