mod tests {
    use myrtio_lamp_composer::{
        ControlChannel, ControlIntent, Controls, IntentProcessor, SwitchDirection,
        channel::{Channel, TryReceiveError, TrySendError},
    };

    #[test]
    fn test_channel_is_fifo() {
        let channel: Channel<u8, 4> = Channel::new();
        let sender = channel.sender();
        let receiver = channel.receiver();

        assert!(channel.is_empty());
        sender.try_send(1).unwrap();
        sender.try_send(2).unwrap();
        sender.try_send(3).unwrap();
        assert_eq!(channel.len(), 3);

        assert_eq!(receiver.try_receive(), Ok(1));
        assert_eq!(receiver.try_receive(), Ok(2));
        assert_eq!(receiver.try_receive(), Ok(3));
        assert_eq!(receiver.try_receive(), Err(TryReceiveError));
    }

    #[test]
    fn test_full_channel_returns_value() {
        let channel: Channel<u8, 2> = Channel::new();
        channel.try_send(1).unwrap();
        channel.try_send(2).unwrap();
        assert!(channel.is_full());
        assert_eq!(channel.try_send(3), Err(TrySendError(3)));

        channel.clear();
        assert!(channel.is_empty());
        assert_eq!(channel.try_send(3), Ok(()));
    }

    #[test]
    fn test_intents_update_controls() {
        let channel: ControlChannel<8> = ControlChannel::new();
        let sender = channel.sender();
        let mut processor = IntentProcessor::new(channel.receiver());
        let mut controls = Controls::default();

        sender.try_send(ControlIntent::Brightness(0.25)).unwrap();
        sender.try_send(ControlIntent::Modulation(1.5)).unwrap();
        let effects = processor.process_pending(&mut controls);

        assert!(!effects.has_switch());
        assert_eq!(controls.brightness(), 0.25);
        assert_eq!(controls.modulation(), 1.0);
        assert!(channel.is_empty());
    }

    #[test]
    fn test_switch_intents_accumulate() {
        let channel: ControlChannel<8> = ControlChannel::new();
        let sender = channel.sender();
        let mut processor = IntentProcessor::new(channel.receiver());
        let mut controls = Controls::default();

        sender.try_send(ControlIntent::Switch(SwitchDirection::Next)).unwrap();
        sender.try_send(ControlIntent::Switch(SwitchDirection::Next)).unwrap();
        sender.try_send(ControlIntent::Switch(SwitchDirection::Previous)).unwrap();
        sender.try_send(ControlIntent::Switch(SwitchDirection::Next)).unwrap();
        let effects = processor.process_pending(&mut controls);
        assert_eq!(effects.switch_step, 2);

        let effects = processor.process_pending(&mut controls);
        assert_eq!(effects.switch_step, 0);
    }

    #[test]
    fn test_controls_reject_nan() {
        let mut controls = Controls::new(f32::NAN, -1.0);
        assert_eq!(controls.brightness(), 0.0);
        assert_eq!(controls.modulation(), 0.0);

        controls.set_brightness(1.0);
        assert_eq!(controls.brightness8(), 255);
        controls.set_brightness(0.5);
        assert_eq!(controls.brightness8(), 127);
    }
}
