mod tests {
    use myrtio_lamp_composer::{
        AnimationId, ControlChannel, ControlIntent, Layout, Point, PowerBudget, PowerConfig,
        Renderer, RendererConfig, SwitchDirection,
        color::Rgbw,
        layout::{LAMP_PIXEL_COUNT, lamp},
        power::estimate_milliamps,
    };

    const CYAN: Rgbw = Rgbw::new(0, 255, 255, 0);

    type LampRenderer<'a> = Renderer<'a, LAMP_PIXEL_COUNT, 4>;

    fn lamp_renderer(channel: &ControlChannel<4>, animation: AnimationId) -> LampRenderer<'_> {
        LampRenderer::new(channel.receiver(), lamp(), &config(animation))
    }

    fn config(animation: AnimationId) -> RendererConfig {
        RendererConfig {
            animation,
            ..RendererConfig::default()
        }
    }

    #[test]
    fn test_renders_active_animation() {
        let channel: ControlChannel<4> = ControlChannel::new();
        let mut renderer = lamp_renderer(&channel, AnimationId::HueLight);

        let frame = renderer.render();
        assert_eq!(frame.len(), LAMP_PIXEL_COUNT);
        assert!(frame.iter().all(|pixel| *pixel == CYAN));
        assert_eq!(renderer.active_animation(), AnimationId::HueLight);
        assert!(!renderer.transition_in_progress());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "layout must place every pixel")]
    fn test_layout_must_match_frame_size() {
        static SHORT: [Point; 2] = [Point::new(0, 0), Point::new(1, 0)];
        let channel: ControlChannel<4> = ControlChannel::new();
        let _renderer: Renderer<'_, 3, 4> = Renderer::new(
            channel.receiver(),
            Layout::new(&SHORT),
            &RendererConfig::default(),
        );
    }

    #[test]
    fn test_switch_completes_once() {
        let channel: ControlChannel<4> = ControlChannel::new();
        let mut renderer = lamp_renderer(&channel, AnimationId::PlainWhite);
        renderer.render();

        assert!(renderer.request_switch(SwitchDirection::Next));
        assert_eq!(renderer.pending_step(), 1);
        assert!(!renderer.transition_in_progress());

        renderer.render();
        assert!(renderer.transition_in_progress());
        assert_eq!(renderer.incoming_animation(), Some(AnimationId::HueLight));
        assert_eq!(renderer.active_animation(), AnimationId::PlainWhite);

        // Requests during a transition are dropped
        assert!(!renderer.request_switch(SwitchDirection::Previous));
        assert_eq!(renderer.pending_step(), 1);

        let mut completed = Vec::new();
        for _ in 0..100 {
            renderer.render();
            if let Some(animation) = renderer.take_completed_switch() {
                completed.push(animation);
            }
            if !renderer.transition_in_progress() {
                break;
            }
        }

        assert_eq!(completed, [AnimationId::HueLight]);
        assert_eq!(renderer.active_animation(), AnimationId::HueLight);
        assert_eq!(renderer.pending_step(), 0);
        assert!(renderer.frame().iter().all(|pixel| *pixel == CYAN));

        renderer.render();
        assert_eq!(renderer.take_completed_switch(), None);
    }

    #[test]
    fn test_switch_intents_wrap_the_index() {
        let channel: ControlChannel<4> = ControlChannel::new();
        let sender = channel.sender();
        let mut renderer = lamp_renderer(&channel, AnimationId::PlainWhite);

        sender.try_send(ControlIntent::Switch(SwitchDirection::Previous)).unwrap();
        renderer.render();
        assert_eq!(renderer.incoming_animation(), Some(AnimationId::EdgeRunner));

        // Ignored while the wipe is running
        sender.try_send(ControlIntent::Switch(SwitchDirection::Next)).unwrap();
        renderer.render();
        assert_eq!(renderer.pending_step(), -1);

        while renderer.transition_in_progress() {
            renderer.render();
        }
        assert_eq!(renderer.active_animation(), AnimationId::EdgeRunner);
        assert_eq!(renderer.take_completed_switch(), Some(AnimationId::EdgeRunner));

        let channel: ControlChannel<4> = ControlChannel::new();
        let mut renderer = lamp_renderer(&channel, AnimationId::EdgeRunner);
        renderer.request_switch(SwitchDirection::Next);
        renderer.render();
        assert_eq!(renderer.incoming_animation(), Some(AnimationId::PlainWhite));
    }

    #[test]
    fn test_opposite_requests_cancel_out() {
        let channel: ControlChannel<4> = ControlChannel::new();
        let mut renderer = lamp_renderer(&channel, AnimationId::DiagBars);

        renderer.request_switch(SwitchDirection::Next);
        renderer.request_switch(SwitchDirection::Previous);
        renderer.render();
        assert!(!renderer.transition_in_progress());
        assert_eq!(renderer.active_animation(), AnimationId::DiagBars);
    }

    #[test]
    fn test_control_intents_reach_animation() {
        let channel: ControlChannel<4> = ControlChannel::new();
        let sender = channel.sender();
        let mut renderer = lamp_renderer(&channel, AnimationId::PlainWhite);

        sender.try_send(ControlIntent::Brightness(0.0)).unwrap();
        let frame = renderer.render();
        assert!(frame.iter().all(|pixel| pixel.is_black()));
        assert_eq!(renderer.controls().brightness(), 0.0);
    }

    #[test]
    fn test_frame_is_kept_under_power_budget() {
        let channel: ControlChannel<4> = ControlChannel::new();
        let config = RendererConfig {
            power: PowerConfig::with_budget(PowerBudget::Milliamps(1000)),
            ..config(AnimationId::PlainWhite)
        };
        let mut renderer = LampRenderer::new(channel.receiver(), lamp(), &config);

        let frame = renderer.render();
        assert!(estimate_milliamps(frame, 20) < 1000);
        assert!(!frame[0].is_black());

        renderer.tick_active();
        assert_eq!(renderer.frame()[0], Rgbw::WHITE);
        assert!(renderer.enforce_power_budget().is_some());
        assert_eq!(renderer.enforce_power_budget(), None);
    }

    #[test]
    fn test_same_seed_renders_same_frames() {
        let channel_a: ControlChannel<4> = ControlChannel::new();
        let channel_b: ControlChannel<4> = ControlChannel::new();
        let config = RendererConfig {
            seed: 42,
            ..config(AnimationId::DiagBars)
        };
        let mut first = LampRenderer::new(channel_a.receiver(), lamp(), &config);
        let mut second = LampRenderer::new(channel_b.receiver(), lamp(), &config);

        for frame in 0..120 {
            if frame == 30 {
                first.request_switch(SwitchDirection::Next);
                second.request_switch(SwitchDirection::Next);
            }
            assert_eq!(first.render(), second.render());
        }
    }
}
