mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_matrix_composer::{
        ControlChannel, ControlIntent, ControlSender, DeviceImage, EffectId, FrameScheduler,
        FrameTimer, InputSnapshot, OutputDriver, Player, PlayerConfig, TrySendError,
        input::NoInput,
    };

    const CONTROL_SIZE: usize = 4;

    #[derive(Default)]
    struct RecordingOutput {
        frames: Vec<DeviceImage>,
    }

    impl OutputDriver for RecordingOutput {
        type Error = core::convert::Infallible;

        fn write(&mut self, image: &DeviceImage) -> Result<(), Self::Error> {
            self.frames.push(*image);
            Ok(())
        }
    }

    /// Fails on the given write
    struct FailingOutput {
        writes: u32,
        fail_at: u32,
    }

    impl OutputDriver for FailingOutput {
        type Error = &'static str;

        fn write(&mut self, _image: &DeviceImage) -> Result<(), Self::Error> {
            self.writes += 1;
            if self.writes == self.fail_at {
                return Err("display disconnected");
            }
            Ok(())
        }
    }

    /// Simulated clock that asks the run loop to stop after some sleeps
    struct StoppingTimer<'a> {
        now_ms: u64,
        sleeps: Vec<Duration>,
        stop_after: usize,
        control: ControlSender<'a, CONTROL_SIZE>,
    }

    impl FrameTimer for StoppingTimer<'_> {
        fn now(&mut self) -> Instant {
            Instant::from_millis(self.now_ms)
        }

        fn sleep(&mut self, duration: Duration) {
            self.now_ms += duration.as_millis();
            self.sleeps.push(duration);
            if self.sleeps.len() == self.stop_after {
                self.control.stop().unwrap();
            }
        }
    }

    fn player(channel: &ControlChannel<CONTROL_SIZE>, effect: EffectId) -> Player<'_, CONTROL_SIZE> {
        Player::new(
            channel.receiver(),
            &PlayerConfig {
                effect,
                frame_delay: None,
            },
        )
    }

    #[test]
    fn test_channel_rejects_when_full() {
        let channel = ControlChannel::<2>::new();
        let sender = channel.sender();
        assert_eq!(sender.try_send(ControlIntent::Reset), Ok(()));
        assert_eq!(sender.try_send(ControlIntent::Stop), Ok(()));
        assert_eq!(
            sender.try_send(ControlIntent::SwitchEffect(EffectId::Waves)),
            Err(TrySendError(ControlIntent::SwitchEffect(EffectId::Waves)))
        );

        let receiver = channel.receiver();
        assert_eq!(receiver.try_receive(), Some(ControlIntent::Reset));
        assert_eq!(receiver.try_receive(), Some(ControlIntent::Stop));
        assert_eq!(receiver.try_receive(), None);
    }

    #[test]
    fn test_player_uses_config() {
        let channel = ControlChannel::<CONTROL_SIZE>::new();
        let player = Player::new(
            channel.receiver(),
            &PlayerConfig {
                effect: EffectId::Snake,
                frame_delay: Some(Duration::from_millis(40)),
            },
        );
        assert_eq!(player.effect_id(), EffectId::Snake);
        assert_eq!(player.frame_delay(), Duration::from_millis(40));
        assert!(player.frame().is_blank());
        assert!(!player.is_stopped());
    }

    #[test]
    fn test_player_default_delays() {
        let channel = ControlChannel::<CONTROL_SIZE>::new();
        for effect in EffectId::ALL {
            let player = player(&channel, effect);
            assert_eq!(player.frame_delay(), effect.default_delay());
        }
        assert_eq!(EffectId::Waves.default_delay(), Duration::from_millis(175));
        assert_eq!(EffectId::Balance.default_delay(), Duration::from_millis(0));
    }

    #[test]
    fn test_player_applies_intents() {
        let channel = ControlChannel::<CONTROL_SIZE>::new();
        let sender = channel.sender();
        let mut player = player(&channel, EffectId::Heartbeat);
        player.render(&InputSnapshot::IDLE);

        sender.try_send(ControlIntent::SwitchEffect(EffectId::Waves)).unwrap();
        sender.try_send(ControlIntent::SetFrameDelay(Duration::from_millis(20))).unwrap();
        let image = *player.render(&InputSnapshot::IDLE);

        assert_eq!(player.effect_id(), EffectId::Waves);
        assert_eq!(player.frame_delay(), Duration::from_millis(20));
        assert_eq!(image.rows()[2], [8; 5]);
    }

    #[test]
    fn test_player_reset_restarts_effect() {
        let channel = ControlChannel::<CONTROL_SIZE>::new();
        let sender = channel.sender();
        let mut player = player(&channel, EffectId::Waves);
        let first = *player.render(&InputSnapshot::IDLE);
        player.render(&InputSnapshot::IDLE);

        sender.try_send(ControlIntent::Reset).unwrap();
        assert_eq!(*player.render(&InputSnapshot::IDLE), first);
    }

    #[test]
    fn test_tick_paces_frames() {
        let channel = ControlChannel::<CONTROL_SIZE>::new();
        let mut scheduler = FrameScheduler::new(
            player(&channel, EffectId::Heartbeat),
            RecordingOutput::default(),
            NoInput,
        );

        let result = scheduler.tick(Instant::from_millis(0)).unwrap();
        assert_eq!(result.next_deadline, Instant::from_millis(100));
        assert_eq!(result.sleep_duration, Duration::from_millis(100));

        // Slightly late: the schedule is kept
        let result = scheduler.tick(Instant::from_millis(130)).unwrap();
        assert_eq!(result.next_deadline, Instant::from_millis(200));
        assert_eq!(result.sleep_duration, Duration::from_millis(70));

        // Far behind: the backlog is dropped
        let result = scheduler.tick(Instant::from_millis(5_000)).unwrap();
        assert_eq!(result.next_deadline, Instant::from_millis(5_100));
        assert_eq!(result.sleep_duration, Duration::from_millis(100));

        assert_eq!(scheduler.output().frames.len(), 3);
    }

    #[test]
    fn test_scheduler_player_applies_intents_between_ticks() {
        let channel = ControlChannel::<CONTROL_SIZE>::new();
        let mut scheduler = FrameScheduler::new(
            player(&channel, EffectId::Heartbeat),
            RecordingOutput::default(),
            NoInput,
        );
        scheduler.tick(Instant::from_millis(0)).unwrap();

        channel
            .sender()
            .try_send(ControlIntent::SwitchEffect(EffectId::FadingSnake))
            .unwrap();
        scheduler.player_mut().poll_control();

        assert_eq!(scheduler.player().effect_id(), EffectId::FadingSnake);
        assert!(scheduler.player().frame().is_blank());
        assert_eq!(scheduler.output().frames.len(), 1);
    }

    #[test]
    fn test_tick_writes_rendered_frame() {
        let channel = ControlChannel::<CONTROL_SIZE>::new();
        let mut scheduler = FrameScheduler::new(
            player(&channel, EffectId::Heartbeat),
            RecordingOutput::default(),
            NoInput,
        );
        scheduler.tick(Instant::from_millis(0)).unwrap();
        let written = scheduler.output().frames[0];
        assert_eq!(&written, scheduler.player().frame());
        assert_eq!(written.level(2, 2), 9);
    }

    #[test]
    fn test_run_stops_on_intent() {
        let channel = ControlChannel::<CONTROL_SIZE>::new();
        let mut scheduler = FrameScheduler::new(
            player(&channel, EffectId::Waves),
            RecordingOutput::default(),
            NoInput,
        );
        let mut timer = StoppingTimer {
            now_ms: 0,
            sleeps: Vec::new(),
            stop_after: 3,
            control: channel.sender(),
        };

        let frames = scheduler.run(&mut timer).unwrap();
        assert_eq!(frames, 3);
        assert_eq!(scheduler.output().frames.len(), 3);
        assert_eq!(timer.sleeps, [Duration::from_millis(175); 3]);
        assert!(scheduler.player().is_stopped());
    }

    #[test]
    fn test_run_returns_immediately_when_stopped() {
        let channel = ControlChannel::<CONTROL_SIZE>::new();
        channel.sender().stop().unwrap();
        let mut scheduler = FrameScheduler::new(
            player(&channel, EffectId::Balance),
            RecordingOutput::default(),
            NoInput,
        );
        let mut timer = StoppingTimer {
            now_ms: 0,
            sleeps: Vec::new(),
            stop_after: usize::MAX,
            control: channel.sender(),
        };

        assert_eq!(scheduler.run(&mut timer), Ok(0));
        assert!(scheduler.output().frames.is_empty());
    }

    #[test]
    fn test_run_propagates_output_error() {
        let channel = ControlChannel::<CONTROL_SIZE>::new();
        let mut scheduler = FrameScheduler::new(
            player(&channel, EffectId::Snake),
            FailingOutput {
                writes: 0,
                fail_at: 2,
            },
            NoInput,
        );
        let mut timer = StoppingTimer {
            now_ms: 0,
            sleeps: Vec::new(),
            stop_after: usize::MAX,
            control: channel.sender(),
        };

        assert_eq!(scheduler.run(&mut timer), Err("display disconnected"));
        assert_eq!(timer.sleeps.len(), 1);
    }
}
