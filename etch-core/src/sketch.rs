//! Sketch application state
//!
//! Owns the cursor, the color cycler and both button debouncers. The
//! firmware drives it from a single loop:
//!
//! 1. [`Sketch::start`] once, to place the cursor and draw the first pixel
//! 2. every tick: feed edges with [`Sketch::on_edge`], collect confirmed
//!    presses with [`Sketch::poll_buttons`], run them with [`Sketch::apply`],
//!    then move and draw with [`Sketch::tick`]

use heapless::Vec;

use crate::color::{Color, ColorCycler};
use crate::config::SketchConfig;
use crate::input::{Action, Button, ButtonEdge, ButtonLevels, Debouncer, Outcome};
use crate::motion::{first_pixel, Cursor};
use crate::traits::{Channel, DisplayError, PixelDisplay, Sampler};

/// Sketch state
#[derive(Debug, Clone)]
pub struct Sketch {
    config: SketchConfig,
    cursor: Cursor,
    colors: ColorCycler,
    /// Indexed by [`Button::index`]
    debouncers: [Debouncer; 2],
}

impl Sketch {
    /// Create a sketch; the cursor is placed by [`Sketch::start`]
    pub fn new(config: SketchConfig) -> Self {
        let debouncer = Debouncer::new(config.settle_ms);
        Self {
            config,
            cursor: Cursor::default(),
            colors: ColorCycler::new(),
            debouncers: [debouncer; 2],
        }
    }

    /// Take the first sample pair and draw the first pixel
    pub fn start<S, D>(&mut self, sampler: &mut S, display: &mut D) -> Result<(), DisplayError>
    where
        S: Sampler,
        D: PixelDisplay,
    {
        let raw_y = sampler.read(Channel::Vertical);
        let raw_x = sampler.read(Channel::Horizontal);

        self.cursor = Cursor::from_samples(raw_y, raw_x, self.config.sample_ratio);

        let (x, y) = first_pixel(raw_y, raw_x, D::BOUNDS);
        display.set_pixel(x, y, self.color())
    }

    /// One main loop iteration: sample Y then X, move, draw
    pub fn tick<S, D>(&mut self, sampler: &mut S, display: &mut D) -> Result<(), DisplayError>
    where
        S: Sampler,
        D: PixelDisplay,
    {
        let raw_y = sampler.read(Channel::Vertical);
        let raw_x = sampler.read(Channel::Horizontal);

        self.cursor.step(raw_y, raw_x, self.config.full_scale, D::BOUNDS);

        display.set_pixel(self.cursor.x(), self.cursor.y(), self.color())
    }

    /// Feed a falling edge to its button's debouncer
    ///
    /// Returns `false` if the button was already settling.
    pub fn on_edge(&mut self, edge: ButtonEdge) -> bool {
        self.debouncers[edge.button.index()].on_falling_edge(edge.at_ms)
    }

    /// Poll both debouncers and collect confirmed presses
    pub fn poll_buttons(&mut self, now_ms: u64, levels: ButtonLevels) -> Vec<Action, 2> {
        let mut actions = Vec::new();

        for button in Button::ALL {
            let outcome = self.debouncers[button.index()].poll(now_ms, levels.get(button));
            if outcome == Outcome::Confirmed {
                // Capacity matches the button count
                let _ = actions.push(button.action());
            }
        }

        actions
    }

    /// Perform a confirmed button action
    pub fn apply<D: PixelDisplay>(
        &mut self,
        action: Action,
        display: &mut D,
    ) -> Result<(), DisplayError> {
        match action {
            Action::AdvanceColor => {
                self.colors.advance();
                Ok(())
            }
            Action::ClearScreen => display.clear(Color::Black),
        }
    }

    /// Loop constants the sketch was built with
    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Current drawing color
    pub fn color(&self) -> Color {
        self.colors.color()
    }

    /// Current palette index
    pub fn color_index(&self) -> usize {
        self.colors.index()
    }

    /// Check if a button is inside its settle window
    pub fn is_settling(&self, button: Button) -> bool {
        !self.debouncers[button.index()].is_idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Level;
    use crate::traits::Bounds;
    use heapless::Deque;

    const CENTER: u16 = 8192;

    /// Sampler that answers from per-channel scripts, then centers
    struct ScriptedSampler {
        selected: Option<Channel>,
        vertical: Deque<u16, 16>,
        horizontal: Deque<u16, 16>,
        reads: Vec<Channel, 32>,
    }

    impl ScriptedSampler {
        fn new(vertical: &[u16], horizontal: &[u16]) -> Self {
            let mut sampler = Self {
                selected: None,
                vertical: Deque::new(),
                horizontal: Deque::new(),
                reads: Vec::new(),
            };
            for &v in vertical {
                sampler.vertical.push_back(v).unwrap();
            }
            for &h in horizontal {
                sampler.horizontal.push_back(h).unwrap();
            }
            sampler
        }
    }

    impl Sampler for ScriptedSampler {
        fn init_channel(&mut self, channel: Channel) {
            self.selected = Some(channel);
        }

        fn sample(&mut self) -> u16 {
            let channel = self.selected.expect("channel not initialized");
            self.reads.push(channel).unwrap();
            let script = match channel {
                Channel::Vertical => &mut self.vertical,
                Channel::Horizontal => &mut self.horizontal,
            };
            script.pop_front().unwrap_or(CENTER)
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum DrawOp {
        Pixel(i32, i32, Color),
        Clear(Color),
    }

    #[derive(Default)]
    struct RecordingDisplay {
        ops: Vec<DrawOp, 64>,
        fail: bool,
    }

    impl PixelDisplay for RecordingDisplay {
        const BOUNDS: Bounds = Bounds::new(127, 127);

        fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), DisplayError> {
            if self.fail {
                return Err(DisplayError::Communication);
            }
            self.ops.push(DrawOp::Pixel(x, y, color)).unwrap();
            Ok(())
        }

        fn clear(&mut self, color: Color) -> Result<(), DisplayError> {
            if self.fail {
                return Err(DisplayError::Communication);
            }
            self.ops.push(DrawOp::Clear(color)).unwrap();
            Ok(())
        }
    }

    fn started(
        vertical: &[u16],
        horizontal: &[u16],
    ) -> (Sketch, ScriptedSampler, RecordingDisplay) {
        let mut sketch = Sketch::new(SketchConfig::default());
        let mut sampler = ScriptedSampler::new(vertical, horizontal);
        let mut display = RecordingDisplay::default();
        sketch.start(&mut sampler, &mut display).unwrap();
        (sketch, sampler, display)
    }

    fn press(sketch: &mut Sketch, button: Button, at_ms: u64) -> Vec<Action, 2> {
        sketch.on_edge(ButtonEdge::new(button, at_ms));
        sketch.poll_buttons(at_ms + 10, ButtonLevels::RELEASED)
    }

    #[test]
    fn test_start_in_dead_zone() {
        let (mut sketch, mut sampler, mut display) = started(&[CENTER], &[CENTER]);

        assert_eq!(sketch.cursor().position(), (63, 63));
        assert_eq!(
            display.ops[0],
            DrawOp::Pixel(127 - 8192, 8192, Color::Black)
        );

        sketch.tick(&mut sampler, &mut display).unwrap();
        assert_eq!(sketch.cursor().position(), (63, 63));
        assert_eq!(display.ops[1], DrawOp::Pixel(63, 63, Color::Black));
    }

    #[test]
    fn test_samples_y_before_x() {
        let (mut sketch, mut sampler, mut display) = started(&[], &[]);
        sketch.tick(&mut sampler, &mut display).unwrap();

        assert_eq!(
            sampler.reads.as_slice(),
            &[
                Channel::Vertical,
                Channel::Horizontal,
                Channel::Vertical,
                Channel::Horizontal
            ]
        );
    }

    #[test]
    fn test_y_deflection_moves_next_tick() {
        let (mut sketch, mut sampler, mut display) = started(&[CENTER, 15000], &[CENTER, CENTER]);
        sketch.tick(&mut sampler, &mut display).unwrap();
        assert_eq!(sketch.cursor().position(), (63, 64));
    }

    #[test]
    fn test_x_deflection_is_mirrored() {
        let (mut sketch, mut sampler, mut display) = started(&[CENTER, CENTER], &[CENTER, 1000]);
        sketch.tick(&mut sampler, &mut display).unwrap();
        assert_eq!(sketch.cursor().position(), (64, 63));
    }

    #[test]
    fn test_y_wraps_at_bottom_edge() {
        // 16383 / 129 = 127, the bottom row
        let (mut sketch, mut sampler, mut display) = started(&[16383, 15000], &[CENTER, CENTER]);
        assert_eq!(sketch.cursor().y(), 127);

        sketch.tick(&mut sampler, &mut display).unwrap();
        assert_eq!(sketch.cursor().y(), 0);
        assert_eq!(display.ops.last(), Some(&DrawOp::Pixel(63, 0, Color::Black)));
    }

    #[test]
    fn test_eight_color_presses() {
        let (mut sketch, _, mut display) = started(&[], &[]);
        let mut seen = [0usize; 8];

        for (i, slot) in seen.iter_mut().enumerate() {
            let actions = press(&mut sketch, Button::ColorCycle, i as u64 * 100);
            assert_eq!(actions.as_slice(), &[Action::AdvanceColor]);
            sketch.apply(actions[0], &mut display).unwrap();
            *slot = sketch.color_index();
        }

        assert_eq!(seen, [1, 2, 3, 4, 5, 6, 7, 0]);
    }

    #[test]
    fn test_pixels_use_current_color() {
        let (mut sketch, mut sampler, mut display) = started(&[], &[]);
        sketch.apply(Action::AdvanceColor, &mut display).unwrap();
        sketch.tick(&mut sampler, &mut display).unwrap();
        assert_eq!(display.ops.last(), Some(&DrawOp::Pixel(63, 63, Color::Red)));
    }

    #[test]
    fn test_clear_press_clears_to_black() {
        let (mut sketch, mut sampler, mut display) = started(&[CENTER, 15000], &[CENTER, 1000]);
        sketch.apply(Action::AdvanceColor, &mut display).unwrap();
        sketch.tick(&mut sampler, &mut display).unwrap();

        let actions = press(&mut sketch, Button::Clear, 500);
        assert_eq!(actions.as_slice(), &[Action::ClearScreen]);
        sketch.apply(actions[0], &mut display).unwrap();

        assert_eq!(display.ops.last(), Some(&DrawOp::Clear(Color::Black)));
        // Clearing leaves cursor and color alone
        assert_eq!(sketch.cursor().position(), (64, 64));
        assert_eq!(sketch.color(), Color::Red);
    }

    #[test]
    fn test_held_button_does_nothing() {
        let (mut sketch, _, _) = started(&[], &[]);
        sketch.on_edge(ButtonEdge::new(Button::ColorCycle, 100));

        let levels = ButtonLevels {
            color_cycle: Level::Pressed,
            clear: Level::Released,
        };
        assert!(sketch.poll_buttons(100, levels).is_empty());
        assert!(sketch.poll_buttons(110, levels).is_empty());
        assert!(!sketch.is_settling(Button::ColorCycle));
        assert_eq!(sketch.color_index(), 0);
    }

    #[test]
    fn test_settle_time_comes_from_config() {
        let config = SketchConfig {
            settle_ms: 30,
            ..SketchConfig::DEFAULT
        };
        let mut sketch = Sketch::new(config);
        assert_eq!(sketch.config().settle_ms, 30);

        sketch.on_edge(ButtonEdge::new(Button::Clear, 100));
        assert!(sketch.poll_buttons(110, ButtonLevels::RELEASED).is_empty());
        assert!(sketch.is_settling(Button::Clear));

        let actions = sketch.poll_buttons(130, ButtonLevels::RELEASED);
        assert_eq!(actions.as_slice(), &[Action::ClearScreen]);
    }

    #[test]
    fn test_buttons_debounce_independently() {
        let (mut sketch, _, _) = started(&[], &[]);
        sketch.on_edge(ButtonEdge::new(Button::ColorCycle, 100));
        sketch.on_edge(ButtonEdge::new(Button::Clear, 105));

        let actions = sketch.poll_buttons(110, ButtonLevels::RELEASED);
        assert_eq!(actions.as_slice(), &[Action::AdvanceColor]);
        assert!(sketch.is_settling(Button::Clear));

        let actions = sketch.poll_buttons(115, ButtonLevels::RELEASED);
        assert_eq!(actions.as_slice(), &[Action::ClearScreen]);
    }

    #[test]
    fn test_display_errors_propagate() {
        let (mut sketch, mut sampler, mut display) = started(&[], &[]);
        display.fail = true;

        assert_eq!(
            sketch.tick(&mut sampler, &mut display),
            Err(DisplayError::Communication)
        );
        assert_eq!(
            sketch.apply(Action::ClearScreen, &mut display),
            Err(DisplayError::Communication)
        );
        // Color changes never touch the display
        assert_eq!(sketch.apply(Action::AdvanceColor, &mut display), Ok(()));
    }
}
