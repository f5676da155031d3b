//! Holy Tic watch face
//!
//! Tells the time in six lines:
//!
//! ```text
//! HOLY SHIT
//! IT'S ALREADY
//! THREE
//! FUCKING
//! TWENTY TWO
//! MOTHERFUCKER
//! ```

use chrono::{NaiveDateTime, Timelike};
use embedded_graphics::geometry::{Point, Size};

use super::{
    canvas::{Canvas, LineStyle, TextMeasure},
    layout::{Layout, LINE_COUNT},
    palette::Palette,
    words::{self, Word},
    ColorMode, FaceState, InterruptionFilter, Properties, WatchFace,
};
use crate::system::config::FaceConfig;

/// Screen size until the host reports one
const DEFAULT_SIZE: Size = Size::new(240, 240);

/// Buffer size that fits the sentence for any time
pub const SENTENCE_LEN: usize = 96;

/// What a line shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineRole {
    Filler,
    Hour,
    Minute,
}

/// Text and role of every line, top to bottom. Only hour and minute change.
const LINES: [(&str, LineRole); LINE_COUNT] = [
    ("HOLY SHIT", LineRole::Filler),
    ("IT'S ALREADY", LineRole::Filler),
    ("", LineRole::Hour),
    ("FUCKING", LineRole::Filler),
    ("", LineRole::Minute),
    ("MOTHERFUCKER", LineRole::Filler),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameLine {
    pub text: Word,
    /// Center of the line
    pub anchor: Point,
    pub role: LineRole,
    pub style: LineStyle,
}

/// One rendered line, positioned by its top left corner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawCommand<'a> {
    pub text: &'a str,
    pub top_left: Point,
    pub style: LineStyle,
}

/// Everything needed to draw the face for one minute
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub background: ColorMode,
    pub lines: [FrameLine; LINE_COUNT],
}

/// Build the frame for `hour` (0-23) and `minute` (0-59).
pub fn compose(
    hour: u32,
    minute: u32,
    state: &FaceState,
    layout: &Layout,
    config: &FaceConfig,
) -> Result<Frame, words::Error> {
    let hour_word = words::shout(words::hour_word(hour)?)?;
    let minute_word = words::shout(words::minute_word(minute)?)?;
    let palette = Palette::for_mode(state.mode(), config);

    let mut lines = LINES.map(|(_, role)| FrameLine {
        text: Word::new(),
        anchor: Point::zero(),
        role,
        style: style_for(role, &palette, config),
    });

    for ((line, (text, _)), anchor) in lines.iter_mut().zip(LINES).zip(layout.anchors) {
        line.anchor = anchor;
        line.text = match line.role {
            LineRole::Hour => hour_word.clone(),
            LineRole::Minute => minute_word.clone(),
            LineRole::Filler => words::shout(text)?,
        };
    }

    Ok(Frame {
        background: palette.background,
        lines,
    })
}

fn style_for(role: LineRole, palette: &Palette, config: &FaceConfig) -> LineStyle {
    match role {
        LineRole::Filler => LineStyle {
            font: config.filler_font,
            color: palette.text,
        },
        LineRole::Hour => LineStyle {
            font: config.accent_font,
            color: palette.hour,
        },
        LineRole::Minute => LineStyle {
            font: config.accent_font,
            color: palette.minute,
        },
    }
}

impl Frame {
    /// Position every line so its bounding box is centered on its anchor.
    pub fn commands<M>(&self, measure: &M) -> [DrawCommand<'_>; LINE_COUNT]
    where
        M: TextMeasure,
    {
        core::array::from_fn(|index| {
            let line = &self.lines[index];
            let size = measure.measure(&line.text, &line.style);
            DrawCommand {
                text: &line.text,
                top_left: Point::new(
                    line.anchor.x - (size.width / 2) as i32,
                    line.anchor.y - (size.height / 2) as i32,
                ),
                style: line.style,
            }
        })
    }

    /// Clear the canvas and draw all lines.
    pub fn render<C>(&self, canvas: &mut C) -> Result<(), C::Error>
    where
        C: Canvas,
    {
        canvas.fill(self.background)?;
        let commands = self.commands(&*canvas);
        for command in commands.iter() {
            canvas.draw_text(command.text, command.top_left, &command.style)?;
        }
        Ok(())
    }

    /// The whole face as one sentence.
    pub fn sentence<'b>(&self, buf: &'b mut [u8]) -> Result<&'b str, core::fmt::Error> {
        let [a, b, c, d, e, f] = &self.lines;
        format_no_std::show(
            buf,
            format_args!(
                "{} {} {} {} {} {}",
                a.text, b.text, c.text, d.text, e.text, f.text
            ),
        )
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum DrawError<E> {
    /// The time could not be put into words
    Time(words::Error),
    /// The canvas refused to draw
    Canvas(E),
}

impl<E> From<words::Error> for DrawError<E> {
    fn from(error: words::Error) -> Self {
        DrawError::Time(error)
    }
}

/// The watch face with the flags the host reported
pub struct HolyWatchface {
    state: FaceState,
    layout: Layout,
    config: FaceConfig,
}

impl HolyWatchface {
    pub fn new(config: FaceConfig) -> Self {
        Self {
            state: FaceState::default(),
            layout: Layout::new(DEFAULT_SIZE, &config),
            config,
        }
    }

    pub fn state(&self) -> FaceState {
        self.state
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Frame for the given local time
    pub fn frame(&self, time: &NaiveDateTime) -> Result<Frame, words::Error> {
        compose(
            time.hour(),
            time.minute(),
            &self.state,
            &self.layout,
            &self.config,
        )
    }
}

impl Default for HolyWatchface {
    fn default() -> Self {
        Self::new(FaceConfig::default())
    }
}

impl WatchFace for HolyWatchface {
    fn on_surface_changed(&mut self, size: Size) {
        debug!("Surface changed to {}x{}", size.width, size.height);
        self.layout = Layout::new(size, &self.config);
    }

    fn on_properties_changed(&mut self, properties: Properties) {
        self.state.low_bit_ambient = properties.low_bit_ambient;
        self.state.burn_in_protection = properties.burn_in_protection;
    }

    fn on_ambient_mode_changed(&mut self, ambient: bool) -> bool {
        self.state.ambient = ambient;
        true
    }

    fn on_interruption_filter_changed(&mut self, filter: InterruptionFilter) -> bool {
        let muted = filter.is_mute();
        if self.state.muted == muted {
            return false;
        }
        self.state.muted = muted;
        true
    }

    fn draw<C>(&self, canvas: &mut C, time: &NaiveDateTime) -> Result<(), DrawError<C::Error>>
    where
        C: Canvas,
    {
        let frame = self.frame(time)?;

        let mut buf = [0u8; SENTENCE_LEN];
        if let Ok(sentence) = frame.sentence(&mut buf) {
            debug!("{}", sentence);
        }

        frame.render(canvas).map_err(DrawError::Canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{
        canvas::{
            testing::{Op, RecordingCanvas, TestDisplay},
            MonoMeasure, Surface,
        },
        DisplayMode,
    };
    use chrono::NaiveDate;
    use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

    fn layout() -> Layout {
        Layout::new(Size::new(240, 240), &FaceConfig::default())
    }

    fn sentence(hour: u32, minute: u32) -> std::string::String {
        let frame = compose(hour, minute, &FaceState::default(), &layout(), &FaceConfig::default())
            .unwrap();
        let mut buf = [0u8; SENTENCE_LEN];
        frame.sentence(&mut buf).unwrap().into()
    }

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 3)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn afternoon_sentence() {
        assert_eq!(
            sentence(15, 22),
            "HOLY SHIT IT'S ALREADY THREE FUCKING TWENTY TWO MOTHERFUCKER"
        );
    }

    #[test]
    fn midnight_and_noon() {
        let midnight = "HOLY SHIT IT'S ALREADY TWELVE FUCKING O'CLOCK MOTHERFUCKER";
        assert_eq!(sentence(0, 0), midnight);
        assert_eq!(sentence(12, 0), midnight);
    }

    #[test]
    fn last_minute_of_the_day() {
        assert_eq!(
            sentence(23, 59),
            "HOLY SHIT IT'S ALREADY ELEVEN FUCKING FIFTY NINE MOTHERFUCKER"
        );
    }

    #[test]
    fn every_time_composes() {
        let layout = layout();
        let config = FaceConfig::default();
        for hour in 0..24 {
            for minute in 0..60 {
                let frame = compose(hour, minute, &FaceState::default(), &layout, &config).unwrap();
                assert!(frame.lines.iter().all(|line| !line.text.is_empty()));

                let mut buf = [0u8; SENTENCE_LEN];
                let sentence = frame.sentence(&mut buf).unwrap();
                assert!(sentence.starts_with("HOLY SHIT IT'S ALREADY "));
                assert!(sentence.ends_with(" MOTHERFUCKER"));
            }
        }
    }

    #[test]
    fn out_of_range_fails_fast() {
        let state = FaceState::default();
        let config = FaceConfig::default();
        assert_eq!(
            compose(24, 0, &state, &layout(), &config),
            Err(words::Error::HourOutOfRange(24))
        );
        assert_eq!(
            compose(0, 60, &state, &layout(), &config),
            Err(words::Error::MinuteOutOfRange(60))
        );
    }

    #[test]
    fn same_input_same_commands() {
        let state = FaceState::default();
        let config = FaceConfig::default();
        let first = compose(9, 41, &state, &layout(), &config).unwrap();
        let second = compose(9, 41, &state, &layout(), &config).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.commands(&MonoMeasure), second.commands(&MonoMeasure));
    }

    #[test]
    fn lines_are_centered() {
        let frame = compose(15, 22, &FaceState::default(), &layout(), &FaceConfig::default())
            .unwrap();
        for (command, line) in frame.commands(&MonoMeasure).iter().zip(frame.lines.iter()) {
            let size = MonoMeasure.measure(command.text, &command.style);
            let left = command.top_left.x;
            let right = 240 - (command.top_left.x + size.width as i32);
            assert!((left - right).abs() <= 1, "{} is off center", command.text);
            assert_eq!(command.top_left.y, line.anchor.y - (size.height / 2) as i32);
        }
    }

    #[test]
    fn mode_changes_colors_only() {
        let config = FaceConfig::default();
        let normal = compose(7, 5, &FaceState::default(), &layout(), &config).unwrap();
        let states = [
            FaceState {
                ambient: true,
                ..Default::default()
            },
            FaceState {
                ambient: true,
                low_bit_ambient: true,
                ..Default::default()
            },
            FaceState {
                muted: true,
                ..Default::default()
            },
        ];

        for state in states {
            let frame = compose(7, 5, &state, &layout(), &config).unwrap();
            let a = frame.commands(&MonoMeasure);
            let b = normal.commands(&MonoMeasure);
            for (x, y) in a.iter().zip(b.iter()) {
                assert_eq!(x.text, y.text);
                assert_eq!(x.top_left, y.top_left);
            }
        }
    }

    #[test]
    fn normal_mode_accents() {
        let config = FaceConfig::default();
        let frame = compose(15, 22, &FaceState::default(), &layout(), &config).unwrap();
        assert_eq!(frame.lines[2].style.color, config.hour_color);
        assert_eq!(frame.lines[4].style.color, config.minute_color);
        assert_eq!(frame.lines[0].style.color, Rgb565::WHITE);
        assert!(core::ptr::eq(frame.lines[2].style.font, config.accent_font));
        assert!(core::ptr::eq(frame.lines[3].style.font, config.filler_font));
    }

    #[test]
    fn low_fidelity_ambient_is_white_on_black() {
        let state = FaceState {
            ambient: true,
            low_bit_ambient: true,
            ..Default::default()
        };
        assert_eq!(state.mode(), DisplayMode::AmbientLowFidelity);

        let config = FaceConfig {
            background: Rgb565::new(3, 3, 3),
            ..FaceConfig::default()
        };
        let frame = compose(15, 22, &state, &layout(), &config).unwrap();
        assert_eq!(frame.background, Rgb565::BLACK);
        assert!(frame.lines.iter().all(|line| line.style.color == Rgb565::WHITE));
    }

    #[test]
    fn draw_fills_then_writes_six_lines() {
        let face = HolyWatchface::default();
        let mut canvas = RecordingCanvas::default();
        face.draw(&mut canvas, &at(15, 22)).unwrap();

        assert_eq!(canvas.ops[0], Op::Fill(Rgb565::BLACK));
        assert_eq!(
            canvas.texts(),
            [
                "HOLY SHIT",
                "IT'S ALREADY",
                "THREE",
                "FUCKING",
                "TWENTY TWO",
                "MOTHERFUCKER"
            ]
        );
    }

    #[test]
    fn draw_on_display() {
        let face = HolyWatchface::default();
        let mut display = TestDisplay::new(Size::new(240, 240), Rgb565::RED);
        face.draw(&mut Surface::new(&mut display), &at(15, 22)).unwrap();

        let config = FaceConfig::default();
        assert_eq!(display.count(Rgb565::RED), 0);
        assert!(display.count(Rgb565::WHITE) > 0);
        assert!(display.count(config.hour_color) > 0);
        assert!(display.count(config.minute_color) > 0);
    }

    #[test]
    fn callbacks_update_state() {
        let mut face = HolyWatchface::default();
        face.on_properties_changed(Properties {
            low_bit_ambient: true,
            burn_in_protection: false,
        });
        assert_eq!(face.state().mode(), DisplayMode::Normal);
        assert!(face.on_ambient_mode_changed(true));
        assert_eq!(face.state().mode(), DisplayMode::AmbientLowFidelity);

        assert!(face.on_interruption_filter_changed(InterruptionFilter::None));
        assert!(!face.on_interruption_filter_changed(InterruptionFilter::None));
        assert!(face.state().muted);
        assert!(face.on_interruption_filter_changed(InterruptionFilter::All));
        assert!(!face.on_interruption_filter_changed(InterruptionFilter::Priority));
    }

    #[test]
    fn surface_change_moves_lines() {
        let mut face = HolyWatchface::default();
        face.on_surface_changed(Size::new(320, 320));
        assert_eq!(face.layout().geometry.center, Point::new(160, 160));

        let mut canvas = RecordingCanvas::default();
        face.draw(&mut canvas, &at(1, 1)).unwrap();
        let xs: Vec<i32> = canvas
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { top_left, .. } => Some(top_left.x),
                Op::Fill(_) => None,
            })
            .collect();
        assert_eq!(xs.len(), LINE_COUNT);
        assert!(xs.iter().all(|&x| x > 0 && x < 160));
    }
}
