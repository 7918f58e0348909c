use eframe::egui::{
    self, Context, Pos2, Rect, RichText, Sense, Shape, Stroke, TextureHandle, TextureOptions, Ui,
    pos2,
};
use eframe::epaint::Color32;
use sdrdeck_messages::{Hertz, MagnitudeFrame};

use crate::presets::{BANDS, BandPreset};
use crate::scheduler::{Repaint, RenderScheduler};
use crate::tuning::FrequencyMapper;
use crate::view::ViewState;

/// Share of the visualizer height given to the spectrum plot.
const SPECTRUM_SHARE: f32 = 0.25;

const CENTER_MARKER: Color32 = Color32::from_rgba_premultiplied(0x80, 0, 0, 0x80);
const CROSSHAIR: Color32 = Color32::from_rgba_premultiplied(0x4d, 0, 0, 0x4d);

/// What the operator did to the visualizer during one frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Interaction {
    /// Pointer went down on the plot: tune here, quantized to the step.
    pub tune_to: Option<Hertz>,
    /// Unquantized frequency under the pointer, if it is over the plot.
    pub hover: Option<Hertz>,
    /// Net wheel ticks while hovered, positive for scrolling up.
    pub wheel_ticks: i32,
    /// Band picked from the context menu.
    pub band: Option<BandPreset>,
}

/// Spectrum plot stacked over the waterfall, with pointer tuning.
///
/// Owns the render scheduler and the cached waterfall texture. The texture is
/// only re-uploaded when the scheduler reports the raster changed.
pub struct Visualizer {
    scheduler: RenderScheduler,
    texture: Option<TextureHandle>,
    needs_gpu_upload: bool,
}

impl Visualizer {
    pub fn new() -> Self {
        Self {
            scheduler: RenderScheduler::new(),
            texture: None,
            needs_gpu_upload: false,
        }
    }

    /// Draw one pass. Presses inside `overlay` belong to the widget drawn on
    /// top and do not tune.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        view: &ViewState,
        frame: &MagnitudeFrame,
        overlay: Rect,
    ) -> Interaction {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let rect = response.rect;
        let plot = Rect::from_min_max(
            rect.min,
            pos2(rect.right(), rect.top() + rect.height() * SPECTRUM_SHARE),
        );
        let waterfall = Rect::from_min_max(pos2(rect.left(), plot.bottom()), rect.max);

        let ppp = ui.ctx().pixels_per_point();
        let waterfall_px = [
            (waterfall.width() * ppp).round().max(0.0) as usize,
            (waterfall.height() * ppp).round().max(0.0) as usize,
        ];

        let Some(pass) = self.scheduler.run_pass(view, frame, plot, waterfall_px) else {
            return Interaction::default();
        };
        if pass.raster_changed {
            self.needs_gpu_upload = true;
        }
        self.upload(ui.ctx());

        painter.rect_filled(rect, 0.0, Color32::BLACK);
        if let Some(texture) = &self.texture {
            painter.image(
                texture.id(),
                waterfall,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
        painter.extend(pass.trace.shapes());

        let cx = rect.center().x;
        painter.extend(Shape::dashed_line(
            &[pos2(cx, rect.top()), pos2(cx, rect.bottom())],
            Stroke::new(1.0, CENTER_MARKER),
            4.0,
            4.0,
        ));

        let mapper = FrequencyMapper::new(rect.width(), view.center_frequency, view.view_bandwidth);
        let mut interaction = Interaction::default();

        if let Some(pos) = response.hover_pos() {
            interaction.hover = Some(mapper.hover_frequency(pos.x - rect.left()));
            let crosshair = Stroke::new(1.0, CROSSHAIR);
            painter.line_segment([pos2(pos.x, rect.top()), pos2(pos.x, rect.bottom())], crosshair);
            painter.line_segment([pos2(rect.left(), pos.y), pos2(rect.right(), pos.y)], crosshair);
            interaction.wheel_ticks = wheel_ticks(ui);
        }

        let pressed = ui.input(|i| i.pointer.primary_pressed());
        if pressed && response.is_pointer_button_down_on() {
            if let Some(pos) = response.interact_pointer_pos() {
                interaction.tune_to = press_target(&mapper, rect, overlay, pos, view.step);
            }
        }

        response.context_menu(|ui| {
            ui.label("Quick bands");
            ui.separator();
            for band in BANDS {
                let label = RichText::new(format!("{:<5} {}", band.name, band.frequency)).monospace();
                if ui.button(label).clicked() {
                    interaction.band = Some(band);
                    ui.close();
                }
            }
        });

        interaction
    }

    fn upload(&mut self, ctx: &Context) {
        if !self.needs_gpu_upload {
            return;
        }
        self.needs_gpu_upload = false;

        let raster = self.scheduler.raster();
        if raster.is_empty() {
            self.texture = None;
            return;
        }
        let image = raster.to_image();
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("waterfall", image, TextureOptions::NEAREST))
            }
        }
    }

    pub fn repaint(&self) -> Repaint {
        self.scheduler.repaint()
    }

    pub fn teardown(&mut self) {
        self.scheduler.teardown();
        self.texture = None;
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Frequency a primary press at `pos` tunes to, unless it lands on the overlay.
fn press_target(
    mapper: &FrequencyMapper,
    rect: Rect,
    overlay: Rect,
    pos: Pos2,
    step: Hertz,
) -> Option<Hertz> {
    if overlay.contains(pos) {
        return None;
    }
    Some(mapper.tuned_frequency(pos.x - rect.left(), step))
}

/// Net discrete wheel ticks this frame: one per wheel event, signed by
/// direction, however far each event scrolled.
pub fn wheel_ticks(ui: &Ui) -> i32 {
    ui.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::MouseWheel { delta, .. } if delta.y != 0.0 => {
                    Some(delta.y.signum() as i32)
                }
                _ => None,
            })
            .sum()
    })
}
