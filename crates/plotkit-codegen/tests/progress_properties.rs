//! Property tests for the emitter's externally visible guarantees.

use plotkit_codegen::{render_program, Instruction, InstructionEmitter};
use plotkit_core::{GeneratorSettings, MovementProfile, PathData, PlannerMode, Trajectory};
use proptest::prelude::*;

fn settings(disconnect_distance_mm: u32) -> GeneratorSettings {
    let free = MovementProfile::new(PlannerMode::Speed, 8, 0).unwrap();
    let draw = MovementProfile::new(PlannerMode::Accel, 5, 50).unwrap();
    GeneratorSettings::new(free, vec![draw], disconnect_distance_mm, 300, 0).unwrap()
}

fn arb_trajectory() -> impl Strategy<Value = Trajectory> {
    (
        proptest::collection::vec((-200i32..200, -200i32..200), 1..30),
        0u8..=3,
    )
        .prop_map(|(points, tool_id)| {
            Trajectory::new("gen", PathData::from_points(&points).unwrap(), tool_id, 0).unwrap()
        })
}

proptest! {
    #[test]
    fn progress_is_strictly_increasing_and_bounded(
        trajectories in proptest::collection::vec(arb_trajectory(), 0..6),
        disconnect in 0u32..=50,
    ) {
        let settings = settings(disconnect);
        let program = InstructionEmitter::emit(&settings, &trajectories).unwrap();

        let values: Vec<u8> = program
            .iter()
            .filter_map(|i| match i {
                Instruction::UpdateProgress(pct) => Some(*pct),
                _ => None,
            })
            .collect();

        prop_assert!(values.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(values.iter().all(|&v| v <= 100));
    }

    #[test]
    fn one_move_per_vertex_plus_homing(
        trajectories in proptest::collection::vec(arb_trajectory(), 0..6),
        disconnect in 0u32..=50,
    ) {
        let settings = settings(disconnect);
        let program = InstructionEmitter::emit(&settings, &trajectories).unwrap();

        let total_vertices: usize = trajectories.iter().map(|t| t.path().len()).sum();
        let moves = program
            .iter()
            .filter(|i| matches!(i, Instruction::SetPosition { .. }))
            .count();
        prop_assert_eq!(moves, total_vertices + 1);
    }

    #[test]
    fn emission_is_deterministic_and_terminated(
        trajectories in proptest::collection::vec(arb_trajectory(), 0..6),
        disconnect in 0u32..=50,
    ) {
        let settings = settings(disconnect);
        let first = InstructionEmitter::emit(&settings, &trajectories).unwrap();
        let second = InstructionEmitter::emit(&settings, &trajectories).unwrap();

        prop_assert_eq!(render_program(&first), render_program(&second));
        prop_assert_eq!(first.last(), Some(&Instruction::Quit));
    }
}
