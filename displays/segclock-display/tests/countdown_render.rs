//! Drives the countdown machine and renders every frame

use embedded_graphics::mock_display::MockDisplay;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use segclock_core::countdown::{CountdownTimer, Counters, Group, Notification, TimerMessage, VisibilityPolicy};
use segclock_core::geometry::{Area, DigitSlot, SEGMENTS};
use segclock_core::{DigitPattern, DisplayValue, Segment};
use segclock_display::layout::from_rectangle;
use segclock_display::{layout_groups, DigitPair, TimerScreen, TimerStyle};

fn mono_style() -> TimerStyle<BinaryColor> {
    let mut style = TimerStyle::default();
    style.segments.unlit = BinaryColor::Off;
    style.separator = BinaryColor::On;
    style.separator_background = BinaryColor::Off;
    style.digit_padding = 0;
    style.digit_inset = 0;
    style
}

fn render(screen: &TimerScreen<BinaryColor>) -> MockDisplay<BinaryColor> {
    let mut display = MockDisplay::new();
    display.set_allow_overdraw(true);
    display.set_allow_out_of_bounds_drawing(true);
    screen.draw(&mut display).unwrap();
    display
}

fn lit_pixels(display: &MockDisplay<BinaryColor>) -> usize {
    display
        .bounding_box()
        .points()
        .filter(|p| display.get_pixel(*p) == Some(BinaryColor::On))
        .count()
}

/// Read back the digit shown in `slot` of the pair drawn in `area`
fn read_digit(display: &MockDisplay<BinaryColor>, area: Area, slot: DigitSlot) -> Option<u8> {
    let style = mono_style();
    let fit = DigitPair::new(area, None, 0, &style.segments).fit()?;
    let mut lit = [false; 7];
    for segment in Segment::ALL {
        let center = fit.place(slot, SEGMENTS.polygon(segment).bounds().center());
        lit[segment.index()] = display.get_pixel(Point::new(center.x, center.y)) == Some(BinaryColor::On);
    }
    (0..=9u8).find(|d| {
        let pattern = DigitPattern::for_digit(*d as i32);
        Segment::ALL.iter().all(|s| pattern.is_lit(*s) == lit[s.index()])
    })
}

#[test]
fn seconds_only_countdown_renders_each_value() {
    let mut timer = CountdownTimer::new(VisibilityPolicy::new(true, true));
    let mut screen = TimerScreen::new(mono_style());

    let run = match timer.handle(TimerMessage::SetDuration {
        hour: 0,
        minute: 0,
        second: 12,
    }) {
        Some(Notification::Started { set, snapshot }) => {
            screen.set_snapshot(snapshot);
            set.run
        }
        other => panic!("unexpected {other:?}"),
    };

    let full = Area::new(0, 0, 64, 64);
    let mut finished = 0;
    for expected in (0..12u8).rev() {
        match timer.handle(TimerMessage::Tick(run)) {
            Some(Notification::Redraw(snapshot)) => screen.set_snapshot(snapshot),
            Some(Notification::Finished(snapshot)) => {
                finished += 1;
                screen.set_snapshot(snapshot);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(screen.is_dirty());

        let display = render(&screen);
        screen.mark_clean();

        // only the seconds group is visible and takes the whole width
        let areas = layout_groups(full, &screen.snapshot().visibility);
        assert_eq!(areas.get(Group::Second), Some(full));
        assert_eq!(areas.get(Group::Minute), None);

        let value = DisplayValue::new(expected as u32).unwrap();
        assert_eq!(read_digit(&display, full, DigitSlot::Tens), Some(value.tens()));
        assert_eq!(read_digit(&display, full, DigitSlot::Ones), Some(value.ones()));
    }

    assert_eq!(finished, 1);
    assert_eq!(timer.counters(), Counters::ZERO);
    assert_eq!(timer.handle(TimerMessage::Tick(run)), None);
}

#[test]
fn stopped_timer_renders_blank() {
    let mut timer = CountdownTimer::default();
    let mut screen = TimerScreen::new(mono_style());

    timer.set_duration(0, 0, 30);
    screen.set_snapshot(timer.snapshot());
    let running = render(&screen);
    assert!(lit_pixels(&running) > 0);

    match timer.handle(TimerMessage::Detach) {
        Some(Notification::Stopped(snapshot)) => screen.set_snapshot(snapshot),
        other => panic!("unexpected {other:?}"),
    }
    let stopped = render(&screen);

    // separators stay, every segment goes dark
    let all_groups = from_rectangle(&stopped.bounding_box());
    let areas = layout_groups(all_groups, &screen.snapshot().visibility);
    for (group, area) in areas.iter() {
        if group.is_digits() {
            let fit = DigitPair::new(area, None, 0, &mono_style().segments).fit();
            if let Some(fit) = fit {
                for segment in Segment::ALL {
                    for slot in [DigitSlot::Tens, DigitSlot::Ones] {
                        let c = fit.place(slot, SEGMENTS.polygon(segment).bounds().center());
                        assert_ne!(stopped.get_pixel(Point::new(c.x, c.y)), Some(BinaryColor::On));
                    }
                }
            }
        }
    }
    assert!(lit_pixels(&stopped) < lit_pixels(&running));
}

#[test]
fn hidden_hour_collapses_layout() {
    let mut timer = CountdownTimer::new(VisibilityPolicy::new(true, false));
    timer.set_duration(0, 5, 0);
    let snapshot = timer.snapshot();
    assert!(!snapshot.visibility.hour);
    assert!(snapshot.visibility.minute);

    let areas = layout_groups(Area::new(0, 0, 64, 64), &snapshot.visibility);
    assert_eq!(areas.iter().count(), 3);
    assert_eq!(areas.get(Group::Minute).map(|a| a.x), Some(0));
}
