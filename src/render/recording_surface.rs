use tracing::trace;

use crate::core::{Matrix, Vector};
use crate::error::AdornResult;
use crate::render::{DrawingSurface, PaintState, SurfaceFactory};

/// One recorded surface call.
///
/// Paint commands carry a snapshot of the paint state at the time they were
/// issued, so tests can check which style a fill or stroke used.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    BeginPath,
    ClosePath,
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    Arc {
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    },
    Fill {
        state: PaintState,
    },
    Stroke {
        state: PaintState,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
        state: PaintState,
    },
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Transform {
        coefficients: [f64; 6],
    },
}

/// Headless surface that records every call instead of rasterizing.
///
/// It keeps the same save/restore stack and current-transform bookkeeping a
/// real backend would, which makes it the reference surface for tests and
/// for hosts that only need the draw command stream.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    state: PaintState,
    current_transform: Matrix,
    stack: Vec<(PaintState, Matrix)>,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            state: PaintState::default(),
            current_transform: Matrix::identity(),
            stack: Vec::new(),
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Number of `save` calls not yet matched by `restore`.
    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn current_transform(&self) -> Matrix {
        self.current_transform
    }

    /// Centres of every recorded arc, in the order they were drawn.
    #[must_use]
    pub fn arc_centers(&self) -> Vec<Vector> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Arc { x, y, .. } => Some(Vector::new(*x, *y)),
                _ => None,
            })
            .collect()
    }

    /// Text and anchor of every `fill_text` call, in order.
    #[must_use]
    pub fn texts(&self) -> Vec<(String, Vector)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillText { text, x, y, .. } => {
                    Some((text.clone(), Vector::new(*x, *y)))
                }
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|command| predicate(command)).count()
    }

    fn record(&mut self, command: DrawCommand) {
        trace!(?command, "record surface command");
        self.commands.push(command);
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn paint_state(&self) -> &PaintState {
        &self.state
    }

    fn paint_state_mut(&mut self) -> &mut PaintState {
        &mut self.state
    }

    fn save(&mut self) {
        self.stack
            .push((self.state.clone(), self.current_transform));
        self.record(DrawCommand::Save);
    }

    fn restore(&mut self) {
        if let Some((state, transform)) = self.stack.pop() {
            self.state = state;
            self.current_transform = transform;
        }
        self.record(DrawCommand::Restore);
    }

    fn begin_path(&mut self) {
        self.record(DrawCommand::BeginPath);
    }

    fn close_path(&mut self) {
        self.record(DrawCommand::ClosePath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.record(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.record(DrawCommand::LineTo { x, y });
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) {
        self.record(DrawCommand::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        });
    }

    fn fill(&mut self) -> AdornResult<()> {
        let state = self.state.clone();
        self.record(DrawCommand::Fill { state });
        Ok(())
    }

    fn stroke(&mut self) -> AdornResult<()> {
        let state = self.state.clone();
        self.record(DrawCommand::Stroke { state });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> AdornResult<()> {
        let state = self.state.clone();
        self.record(DrawCommand::FillText {
            text: text.to_owned(),
            x,
            y,
            state,
        });
        Ok(())
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> AdornResult<()> {
        self.record(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
        Ok(())
    }

    fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        let coefficients = [a, b, c, d, e, f];
        self.current_transform
            .append(&Matrix::from_affine_coefficients(coefficients));
        self.record(DrawCommand::Transform { coefficients });
    }
}

/// Factory handing out fresh [`RecordingSurface`]s.
#[derive(Debug, Default)]
pub struct RecordingSurfaceFactory {
    pub created: usize,
}

impl SurfaceFactory for RecordingSurfaceFactory {
    type Surface = RecordingSurface;

    fn create_surface(&mut self, width: u32, height: u32) -> AdornResult<RecordingSurface> {
        self.created += 1;
        Ok(RecordingSurface::new(width, height))
    }
}
