use crate::cell::{CellError, CellNetwork, InputThreshold};
use crate::{BooleanNetwork, NodeId};
use std::collections::HashMap;

impl CellNetwork {
    /// Read-only access to the underlying network.
    pub fn network(&self) -> &BooleanNetwork {
        &self.network
    }

    /// Pin the states of input nodes. See `BooleanNetwork::set_input_states`.
    pub fn set_input_states<I, S>(&mut self, states: I) -> Result<(), CellError>
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        Ok(self.network.set_input_states(states)?)
    }

    /// Pin input nodes according to the concentrations of the bound substances.
    ///
    /// All thresholds are resolved before any input changes, so a missing substance or an
    /// invalid node leaves the cell untouched.
    pub fn apply_environment(
        &mut self,
        thresholds: &[InputThreshold],
        concentrations: &HashMap<String, f64>,
    ) -> Result<(), CellError> {
        let states = thresholds
            .iter()
            .map(|it| it.resolve(concentrations))
            .collect::<Result<Vec<_>, _>>()?;
        self.set_input_states(states)
    }

    /// Perform one asynchronous update attempt using the cell's own generator.
    pub fn step(&mut self) -> Result<Option<NodeId>, CellError> {
        Ok(self.network.step(&mut self.rng)?)
    }

    /// Perform exactly `steps` asynchronous update attempts.
    pub fn propagate(&mut self, steps: usize) -> Result<Option<NodeId>, CellError> {
        Ok(self.network.propagate(steps, &mut self.rng)?)
    }

    /// Perform the number of update attempts given by the simulation configuration.
    pub fn propagate_default(&mut self) -> Result<Option<NodeId>, CellError> {
        self.propagate(self.propagation_steps)
    }

    pub fn get_all_states(&self) -> HashMap<String, bool> {
        self.network.get_all_states()
    }

    /// States of the output nodes, used to decide the fate of the cell.
    pub fn output_states(&self) -> HashMap<String, bool> {
        self.network.get_output_states()
    }

    /// Restore every node to its default state. The generator keeps its position.
    pub fn reset(&mut self) {
        self.network.reset();
    }
}

#[cfg(test)]
mod tests {
    use crate::cell::{CellError, CellNetwork, InputThreshold, NetworkTemplate, SimulationConfig};
    use crate::error::InputStateError;
    use crate::{BooleanNetwork, NetworkDefinition, NodeSpec};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn hypoxia_template(steps: usize) -> NetworkTemplate {
        let network = BooleanNetwork::try_from_definition(&NetworkDefinition {
            nodes: vec![
                NodeSpec::input("oxygen", true),
                NodeSpec::input("EGF", false),
                NodeSpec::internal("HIF1", "!oxygen"),
                NodeSpec::internal("ERK", "EGF & !HIF1"),
                NodeSpec::internal("Necrosis", "HIF1 & !ERK").output(),
                NodeSpec::internal("Proliferation", "ERK").output(),
            ],
        })
        .unwrap();
        let config = SimulationConfig {
            propagation_steps: steps,
            randomize_initial_states: false,
            seed: Some(17),
        };
        NetworkTemplate::new(network, config)
    }

    fn thresholds() -> Vec<InputThreshold> {
        vec![
            InputThreshold::new("o2", "oxygen", 5.0),
            InputThreshold::new("egf", "EGF", 0.5),
        ]
    }

    fn concentrations(o2: f64, egf: f64) -> HashMap<String, f64> {
        HashMap::from([("o2".to_string(), o2), ("egf".to_string(), egf)])
    }

    #[test]
    fn cell_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<CellNetwork>();
        assert_send::<NetworkTemplate>();
    }

    #[test]
    fn environment_drives_outputs() {
        let mut template = hypoxia_template(200);
        assert!(template.network().is_acyclic());
        let mut cell = template.spawn();

        cell.apply_environment(&thresholds(), &concentrations(1.0, 0.0))
            .unwrap();
        cell.propagate_default().unwrap();
        assert_eq!(
            HashMap::from([
                ("Necrosis".to_string(), true),
                ("Proliferation".to_string(), false)
            ]),
            cell.output_states()
        );

        cell.apply_environment(&thresholds(), &concentrations(20.0, 1.0))
            .unwrap();
        cell.propagate_default().unwrap();
        assert_eq!(
            HashMap::from([
                ("Necrosis".to_string(), false),
                ("Proliferation".to_string(), true)
            ]),
            cell.output_states()
        );
    }

    #[test]
    fn environment_is_applied_atomically() {
        let mut cell = hypoxia_template(10).instantiate(0);
        let before = cell.get_all_states();
        let only_oxygen = HashMap::from([("o2".to_string(), 0.0)]);
        match cell.apply_environment(&thresholds(), &only_oxygen) {
            Err(CellError::MissingSubstance(name)) => assert_eq!("egf", name),
            other => panic!("Unexpected result: {:?}", other),
        }
        assert_eq!(before, cell.get_all_states());

        let bad_node = vec![
            InputThreshold::new("o2", "oxygen", 5.0),
            InputThreshold::new("egf", "ERK", 0.5),
        ];
        match cell.apply_environment(&bad_node, &concentrations(0.0, 1.0)) {
            Err(CellError::InputState(InputStateError::NotAnInput(name))) => {
                assert_eq!("ERK", name)
            }
            other => panic!("Unexpected result: {:?}", other),
        }
        assert_eq!(before, cell.get_all_states());
    }

    #[test]
    fn propagate_default_uses_configured_steps() {
        let template = hypoxia_template(7);
        let mut by_default = template.instantiate(9);
        let mut explicit = template.instantiate(9);
        by_default.set_input_states([("oxygen", false)]).unwrap();
        explicit.set_input_states([("oxygen", false)]).unwrap();
        by_default.propagate_default().unwrap();
        explicit.propagate(7).unwrap();
        assert_eq!(explicit.get_all_states(), by_default.get_all_states());
        // Both generators are at the same position afterwards.
        assert_eq!(explicit.step().unwrap(), by_default.step().unwrap());
    }

    #[test]
    fn reset_restores_defaults() {
        let template = hypoxia_template(100);
        let mut cell = template.instantiate(4);
        cell.set_input_states([("oxygen", false), ("EGF", true)])
            .unwrap();
        cell.propagate_default().unwrap();
        assert_ne!(template.network().get_all_states(), cell.get_all_states());
        cell.reset();
        assert_eq!(template.network().get_all_states(), cell.get_all_states());
    }

    #[test]
    fn cells_step_in_parallel() {
        let mut template = hypoxia_template(300);
        assert!(template.network().is_acyclic());
        let mut cells: Vec<_> = (0..8).map(|_| template.spawn()).collect();
        std::thread::scope(|scope| {
            for (i, cell) in cells.iter_mut().enumerate() {
                scope.spawn(move || {
                    let hypoxic = i % 2 == 0;
                    cell.set_input_states([("oxygen", !hypoxic)]).unwrap();
                    cell.propagate_default().unwrap();
                });
            }
        });
        for (i, cell) in cells.iter().enumerate() {
            let hypoxic = i % 2 == 0;
            assert_eq!(Some(hypoxic), cell.network().get_state("Necrosis"));
            assert_eq!(Some(!hypoxic), cell.network().get_state("oxygen"));
        }
        // The template itself never moves.
        assert_eq!(Some(true), template.network().get_state("oxygen"));
        assert_eq!(Some(false), template.network().get_state("Necrosis"));
    }
}
