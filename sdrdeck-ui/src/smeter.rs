use eframe::egui::{
    Align2, FontId, Rect, Response, Sense, Stroke, StrokeKind, Ui, Vec2, Widget, pos2, vec2,
};
use eframe::epaint::Color32;
use rand::Rng;
use sdrdeck_messages::SignalLevel;

pub const SEGMENTS: usize = 15;

/// Needle travel either side of vertical, in degrees.
const SWING_DEG: f32 = 45.0;
/// Peak-to-peak needle jitter, in degrees.
const JITTER_DEG: f32 = 5.0;

const GREEN: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e);
const YELLOW: Color32 = Color32::from_rgb(0xea, 0xb3, 0x08);
const RED: Color32 = Color32::from_rgb(0xdc, 0x26, 0x26);
const UNLIT: Color32 = Color32::from_rgb(0x1f, 0x29, 0x37);

const SCALE: [(&str, f32); 6] = [
    ("0", 0.0),
    ("3", 0.2),
    ("5", 0.4),
    ("7", 0.6),
    ("9", 0.8),
    ("+30", 1.0),
];

pub fn needle_angle(level: SignalLevel, jitter_deg: f32) -> f32 {
    let angle = -SWING_DEG + level.value() / SignalLevel::MAX * 2.0 * SWING_DEG + jitter_deg;
    angle.clamp(-SWING_DEG, SWING_DEG)
}

/// Segment `i` lights once the level passes `i / SEGMENTS * 100`.
pub fn is_lit(segment: usize, level: SignalLevel) -> bool {
    (segment as f32 / SEGMENTS as f32) * SignalLevel::MAX < level.value()
}

pub fn segment_color(segment: usize) -> Color32 {
    match segment {
        13.. => RED,
        10..=12 => YELLOW,
        _ => GREEN,
    }
}

/// Analog-style signal meter with an LED bar.
pub struct SMeter {
    needle_deg: f32,
    level: SignalLevel,
}

impl SMeter {
    pub const SIZE: Vec2 = vec2(192.0, 100.0);

    pub fn new() -> Self {
        Self {
            needle_deg: -SWING_DEG,
            level: SignalLevel::default(),
        }
    }

    /// Re-aim the needle. Jitter is redrawn only when the level moves.
    pub fn set_level(&mut self, level: SignalLevel, rng: &mut impl Rng) {
        if level == self.level {
            return;
        }
        let jitter = (rng.r#gen::<f32>() - 0.5) * JITTER_DEG;
        self.level = level;
        self.needle_deg = needle_angle(level, jitter);
    }
}

impl Default for SMeter {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &SMeter {
    fn ui(self, ui: &mut Ui) -> Response {
        let (response, painter) = ui.allocate_painter(SMeter::SIZE, Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 4.0, Color32::from_black_alpha(204));
        painter.rect_stroke(
            rect,
            4.0,
            Stroke::new(1.0, Color32::from_rgb(0x16, 0x65, 0x34)),
            StrokeKind::Inside,
        );

        let scale = Rect::from_min_size(rect.min + vec2(8.0, 6.0), vec2(rect.width() - 16.0, 60.0));
        let label_font = FontId::monospace(10.0);
        for (label, at) in SCALE {
            let color = if at >= 1.0 { RED } else { GREEN };
            painter.text(
                pos2(scale.left() + 6.0 + at * (scale.width() - 12.0), scale.bottom() - 2.0),
                Align2::CENTER_BOTTOM,
                label,
                label_font.clone(),
                color,
            );
        }

        let pivot = scale.center_bottom();
        let radians = self.needle_deg.to_radians();
        let tip = pivot + vec2(radians.sin(), -radians.cos()) * (scale.height() - 4.0);
        painter.line_segment([pivot, tip], Stroke::new(2.0, Color32::from_rgb(0xef, 0x44, 0x44)));
        painter.circle_filled(pivot, 5.0, Color32::GRAY);

        let led = vec2(6.0, 12.0);
        let gap = 2.0;
        let bar_width = SEGMENTS as f32 * (led.x + gap) - gap;
        let mut x = rect.center().x - bar_width / 2.0;
        let y = scale.bottom() + 6.0;
        for i in 0..SEGMENTS {
            let color = if is_lit(i, self.level) {
                segment_color(i)
            } else {
                UNLIT
            };
            painter.rect_filled(Rect::from_min_size(pos2(x, y), led), 1.0, color);
            x += led.x + gap;
        }

        painter.text(
            pos2(rect.center().x, rect.bottom() - 4.0),
            Align2::CENTER_BOTTOM,
            "S-METER",
            FontId::monospace(11.0),
            Color32::from_rgb(0x4a, 0xde, 0x80),
        );

        response
    }
}
