mod tests {
    use myrtio_lamp_composer::{
        Animation, AnimationId, Controls, Layout, Point, Prng, RenderContext,
        animation::{BouncingBall, DiagBars, EdgeRunner, HueLight, PingPong, PlainWhite},
        color::Rgbw,
        frame::is_black,
        layout::{EdgeSide, LAMP_EDGES, LAMP_PIXEL_COUNT, lamp},
    };

    fn context(brightness: f32, modulation: f32) -> RenderContext<'static> {
        RenderContext::new(Controls::new(brightness, modulation), lamp())
    }

    fn assert_solid(frame: &[Rgbw], color: Rgbw) {
        assert!(frame.iter().all(|pixel| *pixel == color), "{:?}", frame[0]);
    }

    #[test]
    fn test_plain_white_color_temperature() {
        let mut animation = PlainWhite::new();
        let mut frame = [Rgbw::BLACK; 16];

        animation.render(&context(1.0, 0.5), &mut frame);
        assert_solid(&frame, Rgbw::new(0, 0, 0, 255));

        // Dead band around neutral
        animation.render(&context(1.0, 0.45), &mut frame);
        assert_solid(&frame, Rgbw::new(0, 0, 0, 255));

        animation.render(&context(1.0, 0.0), &mut frame);
        assert_solid(&frame, Rgbw::new(64, 100, 239, 0));

        animation.render(&context(1.0, 1.0), &mut frame);
        assert_solid(&frame, Rgbw::new(255, 237, 0, 0));

        animation.render(&context(0.0, 1.0), &mut frame);
        assert_solid(&frame, Rgbw::BLACK);
    }

    #[test]
    fn test_hue_light_follows_modulation() {
        let mut animation = HueLight::new();
        let mut frame = [Rgbw::BLACK; 16];
        let mut scratch = [Rgbw::BLACK; 16];

        let ctx = context(1.0, 0.0);
        animation.advance(&ctx);
        animation.render(&ctx, &mut frame);
        animation.snapshot(&ctx, &mut scratch);
        assert_solid(&frame, Rgbw::new(255, 0, 0, 0));
        assert_eq!(frame, scratch);

        animation.render(&context(1.0, 1.0 / 3.0), &mut frame);
        assert_eq!(frame[0].r, 0);
        assert!(frame[0].g >= 254);
    }

    #[test]
    fn test_diag_bars_are_deterministic() {
        let ctx = context(1.0, 0.7);
        let mut first = DiagBars::new(&ctx.layout, Prng::new(5));
        let mut second = DiagBars::new(&ctx.layout, Prng::new(5));
        let mut frame_a = [Rgbw::BLACK; LAMP_PIXEL_COUNT];
        let mut frame_b = [Rgbw::BLACK; LAMP_PIXEL_COUNT];

        for _ in 0..400 {
            first.advance(&ctx);
            second.advance(&ctx);
            first.render(&ctx, &mut frame_a);
            second.snapshot(&ctx, &mut frame_b);
        }
        assert_eq!(first.positions(), second.positions());
        assert_eq!(frame_a, frame_b);
    }

    #[test]
    fn test_diag_bars_stay_near_the_lamp() {
        let ctx = context(1.0, 1.0);
        let mut animation = DiagBars::new(&ctx.layout, Prng::new(8));
        let width = f32::from(ctx.layout.width());
        let height = f32::from(ctx.layout.height());

        for _ in 0..2000 {
            animation.advance(&ctx);
            let (rising, falling) = animation.positions();
            assert!((-100.0..=width + height + 100.0).contains(&rising));
            assert!((-height - 100.0..=width + 100.0).contains(&falling));
        }
    }

    #[test]
    fn test_diag_bars_reseed_color_on_bounce() {
        let ctx = context(1.0, 1.0);
        let mut animation = DiagBars::new(&ctx.layout, Prng::new(13));
        let mut positions = animation.positions();
        let mut colors = animation.colors();
        let mut trends: (Option<bool>, Option<bool>) = (None, None);
        let mut bounces = 0;

        for _ in 0..2000 {
            animation.advance(&ctx);
            let next_positions = animation.positions();
            let next_colors = animation.colors();

            for (trend, before, after, color_before, color_after) in [
                (&mut trends.0, positions.0, next_positions.0, colors.0, next_colors.0),
                (&mut trends.1, positions.1, next_positions.1, colors.1, next_colors.1),
            ] {
                let rising = after > before;
                let bounced = trend.is_some_and(|previous| previous != rising);
                // Saturation only changes when a bar is reseeded
                assert_eq!(bounced, color_before.1 != color_after.1);
                if bounced {
                    bounces += 1;
                    assert!((color_after.0 - color_before.0 - 0.5).abs() > 1e-3);
                }
                *trend = Some(rising);
            }

            positions = next_positions;
            colors = next_colors;
        }
        assert!(bounces >= 4, "only {bounces} bounces");
    }

    #[test]
    fn test_bouncing_ball_stays_on_strip() {
        let ctx = context(1.0, 1.0);
        let mut ball = BouncingBall::new(LAMP_PIXEL_COUNT, Prng::new(2));
        let mut frame = [Rgbw::BLACK; LAMP_PIXEL_COUNT];

        for _ in 0..1000 {
            ball.advance(&ctx);
            ball.render(&ctx, &mut frame);

            let len = LAMP_PIXEL_COUNT as f32;
            assert!((0.0..=len).contains(&ball.position()));
        }
        assert!(!is_black(&frame));
    }

    #[test]
    fn test_ping_pong_has_no_snapshot() {
        let ctx = context(1.0, 0.5);
        let mut animation = PingPong::new(LAMP_PIXEL_COUNT, Prng::new(4));
        let mut frame = [Rgbw::BLACK; LAMP_PIXEL_COUNT];
        let mut scratch = [Rgbw::BLACK; LAMP_PIXEL_COUNT];

        for _ in 0..500 {
            animation.advance(&ctx);
            animation.render(&ctx, &mut frame);
            animation.snapshot(&ctx, &mut scratch);

            let position = animation.position();
            assert!(position > -3.0 && position < LAMP_PIXEL_COUNT as f32 + 3.0);
        }
        assert!(!is_black(&frame));
        assert!(is_black(&scratch));
    }

    #[test]
    fn test_edge_runner_walks_edges() {
        let ctx = context(1.0, 0.5);
        let mut runner = EdgeRunner::new(Prng::new(6));
        let mut frame = [Rgbw::BLACK; LAMP_PIXEL_COUNT];
        assert_eq!(runner.head(&ctx.layout), None);

        let mut previous: Option<u16> = None;
        for _ in 0..2000 {
            runner.advance(&ctx);
            runner.render(&ctx, &mut frame);

            let head = runner.head(&ctx.layout).unwrap();
            assert!(usize::from(head) < LAMP_PIXEL_COUNT);
            assert!(!frame[usize::from(head)].is_black());

            // Either one pixel further along, or onto an edge end
            if let Some(previous) = previous {
                let neighbour = head.abs_diff(previous) == 1;
                let edge_end = LAMP_EDGES.iter().any(|edge| {
                    head == edge.pixel_at(EdgeSide::Start) || head == edge.pixel_at(EdgeSide::End)
                });
                assert!(neighbour || edge_end, "{previous} -> {head}");
            }
            previous = Some(head);
        }
    }

    #[test]
    fn test_edge_runner_without_graph_draws_nothing() {
        static POINTS: [Point; 3] = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)];
        let ctx = RenderContext::new(Controls::default(), Layout::new(&POINTS));
        let mut runner = EdgeRunner::new(Prng::new(6));
        let mut frame = [Rgbw::WHITE; 3];

        for _ in 0..20 {
            runner.advance(&ctx);
            runner.render(&ctx, &mut frame);
        }
        assert_eq!(runner.head(&ctx.layout), None);
        assert!(is_black(&frame));
    }

    #[test]
    fn test_every_slot_renders_on_the_lamp() {
        let ctx = context(1.0, 0.5);
        for index in 0..6 {
            let id = AnimationId::from_stored(index);
            let mut slot = id.to_slot(&ctx.layout, Prng::new(u64::from(index)));
            let mut frame = [Rgbw::BLACK; LAMP_PIXEL_COUNT];
            for _ in 0..50 {
                slot.advance(&ctx);
                slot.render(&ctx, &mut frame);
            }
            assert!(!is_black(&frame), "{} rendered nothing", id.as_str());
        }
    }

    #[test]
    fn test_rest_points() {
        let ctx = context(1.0, 1.0);
        assert!(PlainWhite::new().is_at_rest());
        assert!(AnimationId::HueLight.to_slot(&ctx.layout, Prng::new(0)).is_at_rest());
        assert!(!AnimationId::DiagBars.to_slot(&ctx.layout, Prng::new(0)).is_at_rest());

        let mut ball = BouncingBall::new(LAMP_PIXEL_COUNT, Prng::new(9));
        let mut rested = false;
        for _ in 0..1000 {
            ball.advance(&ctx);
            rested |= ball.is_at_rest();
        }
        assert!(rested);
    }

    #[test]
    fn test_lamp_layout() {
        let layout = lamp();
        assert_eq!(layout.len(), LAMP_PIXEL_COUNT);
        assert_eq!(layout.width(), 1780);
        assert_eq!(layout.height(), 740);
        assert_eq!(layout.edges().len(), 25);
        assert_eq!(layout.vertices().len(), 12);

        let covered: usize = layout.edges().iter().map(|edge| usize::from(edge.pixel_count())).sum();
        assert_eq!(covered, LAMP_PIXEL_COUNT);

        for (index, edge) in layout.edges().iter().enumerate() {
            for side in [EdgeSide::Start, EdgeSide::End] {
                let end = myrtio_lamp_composer::layout::EdgeEnd::new(index as u8, side);
                let vertices = layout.vertices().iter().filter(|v| v.contains(end)).count();
                assert_eq!(vertices, 1, "edge {index} {side:?}");
            }
            assert!(edge.start() <= edge.end());
        }
    }
}
