#[cfg(test)]
mod tests {
    use pomo::libs::timer::{Timer, TimerMode, TimerState};
    use pomo::libs::view::{bar_fill, progress_line, PROGRESS_BAR_WIDTH};
    use std::time::Duration;

    #[test]
    fn test_bar_fill_bounds() {
        let duration = Duration::from_secs(300);

        assert_eq!(bar_fill(Duration::ZERO, duration), 0);
        assert_eq!(bar_fill(duration, duration), PROGRESS_BAR_WIDTH);
        assert_eq!(bar_fill(Duration::from_secs(150), duration), PROGRESS_BAR_WIDTH / 2);
    }

    #[test]
    fn test_bar_fill_uses_floor() {
        // 59 of 60 seconds: floor(59/60 * 20) = 19, not 20
        assert_eq!(bar_fill(Duration::from_secs(59), Duration::from_secs(60)), 19);
        // 1 of 60 seconds: floor(1/60 * 20) = 0
        assert_eq!(bar_fill(Duration::from_secs(1), Duration::from_secs(60)), 0);
    }

    #[test]
    fn test_bar_fill_never_leaves_range() {
        let duration = Duration::from_secs(60);
        for secs in 0..=60 {
            let fill = bar_fill(Duration::from_secs(secs), duration);
            assert!(fill <= PROGRESS_BAR_WIDTH, "fill {} out of range at {}s", fill, secs);
        }

        // Elapsed past the duration and the degenerate zero duration both
        // clamp to a full bar
        assert_eq!(bar_fill(Duration::from_secs(120), duration), PROGRESS_BAR_WIDTH);
        assert_eq!(bar_fill(Duration::ZERO, Duration::ZERO), PROGRESS_BAR_WIDTH);
    }

    #[test]
    fn test_progress_line_at_start() {
        let timer = Timer::new(Duration::from_secs(25 * 60), TimerMode::Focus);
        let line = progress_line(&timer);

        assert!(line.starts_with('▶'), "unexpected glyph: {}", line);
        assert!(line.contains("[FOCUS]"));
        assert!(line.contains("25:00"));
        assert!(line.contains(&"░".repeat(PROGRESS_BAR_WIDTH)));
    }

    #[test]
    fn test_progress_line_when_paused() {
        let mut timer = Timer::new(Duration::from_secs(5 * 60), TimerMode::Break);
        timer.state = TimerState::Paused;
        let line = progress_line(&timer);

        assert!(line.starts_with('⏸'), "unexpected glyph: {}", line);
        assert!(line.contains("[BREAK]"));
    }

    #[test]
    fn test_progress_line_at_completion() {
        let mut timer = Timer::new(Duration::from_secs(60), TimerMode::Focus);
        timer.remaining = Duration::ZERO;
        let line = progress_line(&timer);

        assert!(line.contains("00:00"));
        assert!(line.contains(&"█".repeat(PROGRESS_BAR_WIDTH)));
    }
}
