mod tests {
    use myrtio_lamp_composer::{
        AnimationId, ControlChannel, Duration, FrameScheduler, IndexStore, Instant, OutputDriver,
        Renderer, RendererConfig, StoreError, SwitchDirection,
        color::Rgbw,
        frame_scheduler::DEFAULT_FRAME_DURATION,
        layout::{LAMP_PIXEL_COUNT, lamp},
    };

    #[derive(Default)]
    struct CountingDriver {
        writes: usize,
        last: Vec<Rgbw>,
    }

    impl OutputDriver for CountingDriver {
        fn write(&mut self, colors: &[Rgbw]) {
            self.writes += 1;
            self.last = colors.to_vec();
        }
    }

    #[derive(Default)]
    struct RecordingStore {
        indices: Vec<u8>,
        busy: bool,
    }

    impl IndexStore for RecordingStore {
        fn write_active_index(&mut self, index: u8) -> Result<(), StoreError> {
            self.indices.push(index);
            if self.busy {
                Err(StoreError::Busy)
            } else {
                Ok(())
            }
        }
    }

    type LampScheduler<'a> =
        FrameScheduler<'a, CountingDriver, RecordingStore, LAMP_PIXEL_COUNT, 4>;

    fn scheduler(channel: &ControlChannel<4>, store: RecordingStore) -> LampScheduler<'_> {
        let config = RendererConfig {
            animation: AnimationId::HueLight,
            ..RendererConfig::default()
        };
        let renderer = Renderer::new(channel.receiver(), lamp(), &config);
        FrameScheduler::new(renderer, CountingDriver::default(), store)
    }

    #[test]
    fn test_default_frame_duration() {
        assert_eq!(DEFAULT_FRAME_DURATION, Duration::from_millis(25));
    }

    #[test]
    fn test_frame_pacing() {
        let channel: ControlChannel<4> = ControlChannel::new();
        let mut scheduler = scheduler(&channel, RecordingStore::default());

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(25));
        assert_eq!(result.sleep_duration, Duration::from_millis(25));

        let result = scheduler.tick(Instant::from_millis(25));
        assert_eq!(result.next_deadline, Instant::from_millis(50));
        assert_eq!(result.sleep_duration, Duration::from_millis(25));

        // Late, but within the drift allowance: keep the schedule
        let result = scheduler.tick(Instant::from_millis(60));
        assert_eq!(result.next_deadline, Instant::from_millis(75));
        assert_eq!(result.sleep_duration, Duration::from_millis(15));

        let result = scheduler.tick(Instant::from_millis(90));
        assert_eq!(result.next_deadline, Instant::from_millis(100));

        assert_eq!(scheduler.output().writes, 4);
        assert_eq!(scheduler.output().last.len(), LAMP_PIXEL_COUNT);
    }

    #[test]
    fn test_drift_correction_skips_backlog() {
        let channel: ControlChannel<4> = ControlChannel::new();
        let mut scheduler = scheduler(&channel, RecordingStore::default());
        scheduler.tick(Instant::from_millis(0));

        let result = scheduler.tick(Instant::from_millis(1000));
        assert_eq!(result.next_deadline, Instant::from_millis(1025));
        assert_eq!(result.sleep_duration, Duration::from_millis(25));

        let result = scheduler.tick(Instant::from_millis(1060));
        assert_eq!(result.next_deadline, Instant::from_millis(1050));
        assert_eq!(result.sleep_duration, Duration::from_millis(0));
    }

    #[test]
    fn test_completed_switch_is_persisted_once() {
        let channel: ControlChannel<4> = ControlChannel::new();
        let mut scheduler = scheduler(&channel, RecordingStore::default());
        scheduler.renderer_mut().request_switch(SwitchDirection::Next);

        let mut completed = Vec::new();
        for frame in 0..200u64 {
            let result = scheduler.tick(Instant::from_millis(frame * 25));
            completed.extend(result.completed_switch);
        }

        assert_eq!(completed, [AnimationId::DiagBars]);
        assert_eq!(scheduler.store().indices, [2]);
        assert_eq!(scheduler.renderer().active_animation(), AnimationId::DiagBars);
    }

    #[test]
    fn test_store_failure_is_swallowed() {
        let channel: ControlChannel<4> = ControlChannel::new();
        let store = RecordingStore {
            busy: true,
            ..RecordingStore::default()
        };
        let mut scheduler = scheduler(&channel, store);
        scheduler.renderer_mut().request_switch(SwitchDirection::Previous);

        for frame in 0..200u64 {
            scheduler.tick(Instant::from_millis(frame * 25));
        }

        assert_eq!(scheduler.store().indices, [0]);
        assert_eq!(scheduler.renderer().active_animation(), AnimationId::PlainWhite);
        assert_eq!(scheduler.output().writes, 200);
    }
}
