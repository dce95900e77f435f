use ratatui::layout::Rect;

pub const SIDEBAR_WIDTH: u16 = 24;

/// Screen regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub sidebar: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let middle_height = area.height.saturating_sub(header_height + footer_height);
    let sidebar_width = SIDEBAR_WIDTH.min(area.width / 3);

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let sidebar = Rect {
        x: area.x,
        y: area.y + header_height,
        width: sidebar_width,
        height: middle_height,
    };
    let body = Rect {
        x: area.x + sidebar_width,
        y: area.y + header_height,
        width: area.width.saturating_sub(sidebar_width),
        height: middle_height,
    };
    Regions {
        header,
        sidebar,
        body,
        footer,
    }
}

/// Rectangle of at most `width` x `height` centred in `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Splits `area` into `count` equal columns.
pub fn columns(area: Rect, count: u16) -> Vec<Rect> {
    let count = count.max(1);
    let width = area.width / count;
    (0..count)
        .map(|index| Rect {
            x: area.x + index * width,
            y: area.y,
            width: if index + 1 == count {
                area.width - width * (count - 1)
            } else {
                width
            },
            height: area.height,
        })
        .collect()
}

/// Takes `height` rows off the top of `area`.
pub fn split_top(area: Rect, height: u16) -> (Rect, Rect) {
    let height = height.min(area.height);
    (
        Rect { height, ..area },
        Rect {
            y: area.y + height,
            height: area.height - height,
            ..area
        },
    )
}
