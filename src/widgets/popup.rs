use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area in the top-right corner of `frame_area`, kept `margin` cells from the edges
pub fn top_right_popup(frame_area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let max_width = frame_area.width.saturating_sub(margin * 2);
    let max_height = frame_area.height.saturating_sub(margin);
    let popup_width = width.min(max_width);
    let popup_height = height.min(max_height);

    Rect {
        x: frame_area.x + frame_area.width.saturating_sub(popup_width + margin),
        y: frame_area.y + margin.min(frame_area.height),
        width: popup_width,
        height: popup_height,
    }
}

/// Horizontally centered column no wider than `max_width`
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = max_width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
