#[cfg(test)]
mod tests {
    use pomo::libs::input::ToggleEvent;
    use pomo::libs::timer::{Timer, TimerMode, TimerState, TICK_INTERVAL};
    use tokio::sync::mpsc;
    use tokio::time::{self, Duration, Instant};

    #[tokio::test(start_paused = true)]
    async fn test_run_without_pauses_completes_after_duration() {
        let (_tx, mut rx) = mpsc::channel(1);
        let mut timer = Timer::new(Duration::from_secs(3), TimerMode::Focus);
        let started = Instant::now();

        timer.run(&mut rx).await;

        assert_eq!(timer.remaining, Duration::ZERO);
        assert_eq!(timer.elapsed(), timer.duration);
        assert_eq!(timer.state, TimerState::Running);

        // Wall-clock time equals the configured duration within one tick
        let total = started.elapsed();
        assert!(total >= timer.duration, "completed early: {:?}", total);
        assert!(total <= timer.duration + TICK_INTERVAL, "completed late: {:?}", total);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_extends_wall_clock_but_not_running_time() {
        let (tx, mut rx) = mpsc::channel(1);
        let mut timer = Timer::new(Duration::from_secs(5), TimerMode::Focus);
        let started = Instant::now();

        // Pause 2.5s in, resume 3s later; completion should land at ~8s
        let driver = tokio::spawn(async move {
            time::sleep(Duration::from_millis(2500)).await;
            tx.send(ToggleEvent).await.unwrap();
            time::sleep(Duration::from_secs(3)).await;
            tx.send(ToggleEvent).await.unwrap();
            tx
        });

        timer.run(&mut rx).await;
        let _tx = driver.await.unwrap();

        assert_eq!(timer.remaining, Duration::ZERO);
        assert_eq!(timer.elapsed(), timer.duration);

        let expected = Duration::from_secs(5) + Duration::from_secs(3);
        let total = started.elapsed();
        assert!(total >= expected, "pause not honored: {:?}", total);
        assert!(total <= expected + TICK_INTERVAL, "drifted past pause: {:?}", total);
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_toggle_channel_does_not_stall_the_run() {
        let (tx, mut rx) = mpsc::channel::<ToggleEvent>(1);
        drop(tx);

        let mut timer = Timer::new(Duration::from_secs(2), TimerMode::Break);
        timer.run(&mut rx).await;

        assert_eq!(timer.remaining, Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_duration_completes_immediately() {
        let (_tx, mut rx) = mpsc::channel(1);
        let mut timer = Timer::new(Duration::ZERO, TimerMode::Focus);
        let started = Instant::now();

        timer.run(&mut rx).await;

        assert_eq!(timer.remaining, Duration::ZERO);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_pauses_then_resumes_with_shifted_end_time() {
        let mut timer = Timer::new(Duration::from_secs(60), TimerMode::Focus);
        let now = Instant::now();
        let end = now + Duration::from_secs(60);

        // Running -> Paused records the pause start and leaves the end
        // time untouched
        let end_after_pause = timer.apply_toggle(now, end);
        assert_eq!(timer.state, TimerState::Paused);
        assert_eq!(timer.paused_at, Some(now));
        assert_eq!(end_after_pause, end);

        // Paused -> Running shifts the end time by exactly the paused span
        let resumed_at = now + Duration::from_secs(7);
        let end_after_resume = timer.apply_toggle(resumed_at, end_after_pause);
        assert_eq!(timer.state, TimerState::Running);
        assert_eq!(timer.paused_at, None);
        assert_eq!(end_after_resume, end + Duration::from_secs(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_ignored_while_stopped() {
        let mut timer = Timer::new(Duration::from_secs(60), TimerMode::Focus);
        timer.state = TimerState::Stopped;
        let now = Instant::now();
        let end = now + Duration::from_secs(60);

        let unchanged = timer.apply_toggle(now, end);
        assert_eq!(timer.state, TimerState::Stopped);
        assert_eq!(timer.paused_at, None);
        assert_eq!(unchanged, end);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_ignored_while_paused() {
        let mut timer = Timer::new(Duration::from_secs(30), TimerMode::Focus);
        let now = Instant::now();
        let end = now + Duration::from_secs(30);

        timer.apply_toggle(now, end);
        assert_eq!(timer.state, TimerState::Paused);

        timer.on_tick(now + Duration::from_secs(10), end);
        assert_eq!(timer.remaining, Duration::from_secs(30), "countdown advanced while paused");
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_tick_clamps_remaining_to_zero() {
        let mut timer = Timer::new(Duration::from_secs(2), TimerMode::Focus);
        let now = Instant::now();
        let end = now + Duration::from_secs(2);

        // A tick delivered well past the end time must clamp, not underflow
        timer.on_tick(now + Duration::from_secs(10), end);
        assert_eq!(timer.remaining, Duration::ZERO);
        assert_eq!(timer.elapsed(), timer.duration);
    }
}
