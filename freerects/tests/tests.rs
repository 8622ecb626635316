#[cfg(test)]
mod tests {
    use freerects::Cell;
    use freerects::entities::{Canvas, Instance, Item, Layout, PlacementError, Problem};
    use freerects::free_space::FreeSpaceEngine;
    use freerects::geometry::geo_traits::CollidesWith;
    use freerects::geometry::primitives::{Dims, Point, Rect};
    use freerects::io;
    use freerects::io::ext_repr::{ExtCanvas, ExtInstance, ExtItem};
    use freerects::util::assertions;
    use test_case::test_case;

    fn canvas(width: Cell, height: Cell) -> Canvas {
        Canvas::new(width, height).unwrap()
    }

    fn item(id: usize, width: Cell, height: Cell) -> Item {
        Item::new(id, Dims(width, height))
    }

    fn rect(x_min: Cell, y_min: Cell, x_max: Cell, y_max: Cell) -> Rect {
        Rect::try_new(x_min, y_min, x_max, y_max).unwrap()
    }

    /// Number of cells covered by the union of the layout's free rects.
    fn free_cell_count(layout: &Layout) -> u64 {
        let bbox = layout.canvas.bbox();
        let mut count = 0;
        for x in bbox.x_min..bbox.x_max {
            for y in bbox.y_min..bbox.y_max {
                let point = Point(x, y);
                if layout
                    .free_space()
                    .free_rects()
                    .iter()
                    .any(|fr| fr.collides_with(&point))
                {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn empty_canvas_has_single_free_rect() {
        let layout = Layout::new(canvas(4, 4));
        assert_eq!(layout.free_space().free_rects(), &[rect(0, 0, 4, 4)]);
        assert!(layout.is_empty());
    }

    #[test]
    fn first_item_is_anchored_at_the_bottom_left() {
        // canvas 4x4, place 2x2: the L-shaped remainder decomposes into two
        // maximal rects, the right column and the top strip
        let mut layout = Layout::new(canvas(4, 4));
        let pk = layout.place_item(&item(0, 2, 2)).unwrap();

        assert_eq!(layout.placed_items[pk].rect, rect(0, 0, 2, 2));
        assert_eq!(
            layout.free_space().free_rects(),
            &[rect(2, 0, 4, 4), rect(0, 2, 4, 4)]
        );
        assert!(assertions::layout_is_consistent(&layout));
        assert_eq!(free_cell_count(&layout), 12);
    }

    #[test]
    fn full_canvas_rejects_further_items() {
        let mut layout = Layout::new(canvas(2, 2));
        layout.place_item(&item(0, 2, 2)).unwrap();

        assert_eq!(layout.free_space().free_rects(), &[] as &[Rect]);
        assert_eq!(
            layout.place_item(&item(1, 1, 1)),
            Err(PlacementError::NoSpace)
        );
        assert_eq!(layout.placed_items.len(), 1);
    }

    #[test]
    fn scattered_free_cells_do_not_fit_a_large_item() {
        // six free cells remain, but no single free rect is 3x3
        let mut layout = Layout::new(canvas(3, 3));
        for id in 0..3 {
            layout.place_item(&item(id, 1, 1)).unwrap();
            assert!(assertions::layout_is_consistent(&layout));
        }

        assert_eq!(
            layout.place_item(&item(3, 3, 3)),
            Err(PlacementError::NoSpace)
        );
        assert_eq!(layout.placed_items.len(), 3);
        assert_eq!(free_cell_count(&layout), 6);
    }

    #[test]
    fn strip_canvas_fills_exactly() {
        let mut layout = Layout::new(canvas(5, 1));
        let first = layout.place_item(&item(0, 2, 1)).unwrap();
        let second = layout.place_item(&item(1, 3, 1)).unwrap();

        assert_eq!(layout.placed_items[first].rect, rect(0, 0, 2, 1));
        assert_eq!(layout.placed_items[second].rect, rect(2, 0, 5, 1));
        assert_eq!(layout.free_space().free_rects(), &[] as &[Rect]);
        assert_eq!(
            layout.place_item(&item(2, 1, 1)),
            Err(PlacementError::NoSpace)
        );
    }

    #[test_case(0, 1; "zero width")]
    #[test_case(-1, 2; "negative width")]
    #[test_case(5, 1; "wider than canvas")]
    #[test_case(1, 5; "taller than canvas")]
    fn oversized_or_degenerate_items_fail_fast(width: Cell, height: Cell) {
        let mut layout = Layout::new(canvas(4, 4));
        layout.place_item(&item(0, 1, 1)).unwrap();
        let free_before = layout.free_space().free_rects().to_vec();

        let result = layout.place_item(&Item::new(1, Dims(width, height)));

        assert_eq!(
            result,
            Err(PlacementError::InvalidSize {
                dims: Dims(width, height)
            })
        );
        assert_eq!(layout.placed_items.len(), 1);
        assert_eq!(layout.free_space().free_rects(), free_before.as_slice());
    }

    #[test]
    fn placement_is_deterministic() {
        let sizes = [(2, 2), (3, 1), (1, 3), (2, 1), (1, 1)];

        let run = || {
            let mut layout = Layout::new(canvas(6, 4));
            let mut placed = vec![];
            for (id, (w, h)) in sizes.iter().enumerate() {
                if let Ok(pk) = layout.place_item(&item(id, *w, *h)) {
                    placed.push(layout.placed_items[pk].rect);
                }
            }
            placed
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn recomputation_is_idempotent() {
        let mut layout = Layout::new(canvas(6, 4));
        for (id, (w, h)) in [(2, 2), (3, 1), (1, 3)].iter().enumerate() {
            layout.place_item(&item(id, *w, *h)).unwrap();
        }

        assert!(assertions::engine_matches_fresh_recompute(&layout));

        let placed = layout.placed_rects();
        let mut engine = FreeSpaceEngine::new(layout.canvas.bbox());
        engine.recompute(&placed);
        let first = engine.free_rects().to_vec();
        engine.recompute(&placed);
        assert_eq!(engine.free_rects(), first.as_slice());
    }

    #[test]
    fn free_rects_are_ordered_with_ascending_x_tiebreak() {
        // a placed rect splitting the bottom row leaves two free rects with
        // y_min = 0; the narrower left one must come first
        let mut engine = FreeSpaceEngine::new(canvas(4, 2).bbox());
        engine.recompute(&[rect(1, 0, 2, 1)]);

        assert_eq!(
            engine.free_rects(),
            &[rect(0, 0, 1, 2), rect(2, 0, 4, 2), rect(0, 1, 4, 2)]
        );
        assert!(assertions::free_rects_non_redundant(engine.free_rects()));
        assert!(assertions::free_rects_sorted(engine.free_rects()));
    }

    #[test_case(4, 4, &[(2, 2), (2, 2), (2, 2), (2, 2)]; "four quadrants")]
    #[test_case(5, 3, &[(2, 3), (3, 1), (3, 1), (3, 1)]; "mixed sizes")]
    #[test_case(7, 5, &[(3, 2), (2, 4), (4, 1), (1, 1), (2, 2), (5, 1)]; "irregular fill")]
    #[test_case(1, 1, &[(1, 1)]; "single cell")]
    fn invariants_hold_after_every_placement(
        width: Cell,
        height: Cell,
        sizes: &[(Cell, Cell)],
    ) {
        let mut layout = Layout::new(canvas(width, height));
        for (id, (w, h)) in sizes.iter().enumerate() {
            match layout.place_item(&item(id, *w, *h)) {
                Ok(_) => assert!(assertions::layout_is_consistent(&layout)),
                Err(PlacementError::NoSpace) => {
                    // failed placements must leave the layout untouched
                    assert!(assertions::layout_is_consistent(&layout));
                }
                Err(e) => panic!("unexpected placement error: {e}"),
            }
        }
        assert!(assertions::engine_matches_fresh_recompute(&layout));
    }

    #[test]
    fn snapshot_restores_layout_and_free_space() {
        let mut layout = Layout::new(canvas(5, 5));
        layout.place_item(&item(0, 2, 2)).unwrap();
        layout.place_item(&item(1, 3, 1)).unwrap();

        let snapshot = layout.save();
        layout.place_item(&item(2, 1, 1)).unwrap();
        assert_eq!(layout.placed_items.len(), 3);

        layout.restore(&snapshot);
        assert_eq!(layout.placed_items.len(), 2);
        assert!(assertions::snapshot_matches_layout(&layout, &snapshot));
        assert!(assertions::layout_is_consistent(&layout));

        let rebuilt = Layout::from_snapshot(&snapshot);
        assert!(assertions::snapshot_matches_layout(&rebuilt, &snapshot));
    }

    #[test]
    fn problem_tracks_remaining_demand() {
        let instance = Instance::new(
            vec![(item(0, 2, 2), 2), (item(1, 1, 1), 1)],
            canvas(4, 4),
        );
        let mut problem = Problem::new(instance);

        problem.place_item(0).unwrap();
        problem.place_item(0).unwrap();
        assert_eq!(problem.item_demand_qtys, vec![0, 1]);

        let solution = problem.save();

        problem.place_item(1).unwrap();
        assert_eq!(problem.item_demand_qtys, vec![0, 0]);

        problem.restore(&solution);
        assert_eq!(problem.item_demand_qtys, vec![0, 1]);
        assert_eq!(problem.layout.placed_items.len(), 2);
    }

    #[test]
    fn import_rejects_non_consecutive_ids() {
        let ext = ExtInstance {
            canvas: ExtCanvas {
                width: 4,
                height: 4,
            },
            items: vec![
                ExtItem {
                    id: 0,
                    width: 1,
                    height: 1,
                    demand: 1,
                },
                ExtItem {
                    id: 2,
                    width: 1,
                    height: 1,
                    demand: 1,
                },
            ],
        };
        assert!(io::import(&ext).is_err());
    }

    #[test]
    fn export_reports_placements_and_free_rects() {
        let instance = Instance::new(vec![(item(0, 2, 2), 1)], canvas(4, 4));
        let mut problem = Problem::new(instance);
        problem.place_item(0).unwrap();
        let solution = problem.save();

        let epoch = solution.time_stamp;
        let ext = io::export(&solution, epoch);

        assert_eq!(ext.placements.len(), 1);
        assert_eq!(
            (ext.placements[0].x, ext.placements[0].y),
            (0, 0)
        );
        assert_eq!(ext.free_rects.len(), 2);
        assert_eq!(ext.density, 0.25_f32);
    }
}
