//! Interactive editing of a [`RegionSet`].
//!
//! The [`Editor`] owns the live [`EditorState`] and records a snapshot of it in its [`History`]
//! after every mutation, unless the mutation was itself the replay of a snapshot.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    capacity::{Calculation, CapacityRequest, CapacityService},
    cartesian::{Orientation, Ring},
    config::EditorConfig,
    error::Error,
    history::History,
    merge,
    region::{Region, RegionId, RegionSet},
};

/// What a newly drawn ring does to the regions it overlaps.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    /// The ring is merged into the regions it overlaps, or becomes a new region.
    #[default]
    Add,
    /// The ring is subtracted from the regions it overlaps.
    Remove,
}

/// The scalar parameters forwarded to the capacity service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    pub barrier_size: f64,
    pub person_radius: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            barrier_size: 0.,
            person_radius: 1.5,
        }
    }
}

/// Everything a history snapshot holds.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EditorState {
    pub regions: RegionSet,
    pub tool: Tool,
    pub parameters: Parameters,
}

/// The outcome of committing a drawn ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commit {
    /// The ring became a brand new region.
    Created(RegionId),
    /// The ring was merged into the given regions.
    Merged(Vec<RegionId>),
    /// The ring was subtracted from the given regions.
    Subtracted(Vec<RegionId>),
    /// The ring changed nothing.
    Discarded,
}

/// The edit controller.
#[derive(Debug)]
pub struct Editor {
    state: EditorState,
    history: History<EditorState>,
    config: EditorConfig,
    /// The identifier the next created region gets.
    next_id: u64,
    /// Whether the pending change comes from a history replay.
    replaying: bool,
    calculation: Calculation,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        let state = EditorState {
            parameters: config.parameters,
            ..Default::default()
        };

        Self {
            history: History::new(state.clone(), config.history),
            state,
            config,
            next_id: 1,
            replaying: false,
            calculation: Calculation::default(),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn regions(&self) -> &RegionSet {
        &self.state.regions
    }

    pub fn tool(&self) -> Tool {
        self.state.tool
    }

    pub fn parameters(&self) -> Parameters {
        self.state.parameters
    }

    pub fn history(&self) -> &History<EditorState> {
        &self.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Applies the given drawn ring to the regions according to the active tool.
    pub fn commit(&mut self, ring: impl Into<Ring>) -> Commit {
        match self.state.tool {
            Tool::Add => self.commit_add(ring),
            Tool::Remove => self.commit_remove(ring),
        }
    }

    /// Merges the given ring into every region it overlaps, or creates a new region from it if
    /// it overlaps none.
    pub fn commit_add(&mut self, ring: impl Into<Ring>) -> Commit {
        let candidate = ring.into();
        if candidate.is_degenerate() {
            debug!(tool = ?Tool::Add, "degenerate drawing ignored");
            return Commit::Discarded;
        }

        let hits = self.state.regions.find_intersecting(&candidate);
        if hits.is_empty() {
            let id = self.mint_id();
            self.state.regions.insert(Region::new(id, candidate));
            debug!(region = %id, "region created");

            self.settle();
            return Commit::Created(id);
        }

        let candidate = candidate.oriented(Orientation::CounterClockwise);
        for &id in &hits {
            let Some(region) = self.state.regions.get_mut(id) else {
                continue;
            };

            let merged = merge::union(region.outer(), &candidate, self.config.tolerance);
            match <[Ring; 1]>::try_from(merged) {
                Ok([ring]) => region.set_rings(vec![ring]),
                Err(_) => region.push_ring(candidate.clone()),
            }
        }

        debug!(regions = ?hits, "drawing merged");
        self.settle();
        Commit::Merged(hits)
    }

    /// Subtracts the given ring from every region it overlaps.
    ///
    /// The ring is discarded if it overlaps no region.
    pub fn commit_remove(&mut self, ring: impl Into<Ring>) -> Commit {
        let candidate = ring.into();
        if candidate.is_degenerate() {
            debug!(tool = ?Tool::Remove, "degenerate drawing ignored");
            return Commit::Discarded;
        }

        let hits = self.state.regions.find_intersecting(&candidate);
        if hits.is_empty() {
            debug!("drawing overlaps no region");
            return Commit::Discarded;
        }

        let candidate = candidate.oriented(Orientation::Clockwise);
        for &id in &hits {
            let Some(region) = self.state.regions.get_mut(id) else {
                continue;
            };

            let remaining = merge::difference(region.outer(), &candidate, self.config.tolerance);
            match <[Ring; 1]>::try_from(remaining) {
                Ok([ring]) => region.set_outer(ring),
                Err(_) => region.push_ring(candidate.clone()),
            }
        }

        debug!(regions = ?hits, "drawing subtracted");
        self.settle();
        Commit::Subtracted(hits)
    }

    /// Removes the region with the given identifier.
    pub fn delete_region(&mut self, id: RegionId) -> Result<Region, Error> {
        let region = self
            .state
            .regions
            .remove(id)
            .ok_or(Error::RegionNotFound(id))?;

        debug!(region = %id, "region deleted");
        self.settle();
        Ok(region)
    }

    /// Replaces the rings of the region with the given identifier, as when its vertices get
    /// dragged around on the drawing surface.
    pub fn reshape_region(&mut self, id: RegionId, rings: Vec<Ring>) -> Result<(), Error> {
        let region = self
            .state
            .regions
            .get_mut(id)
            .ok_or(Error::RegionNotFound(id))?;

        if rings.is_empty() {
            return Err(Error::EmptyRegion(id));
        }

        region.set_rings(rings);
        debug!(region = %id, "region reshaped");
        self.settle();
        Ok(())
    }

    /// Activates the given tool. Selecting the active tool does nothing.
    pub fn select_tool(&mut self, tool: Tool) {
        if self.state.tool == tool {
            return;
        }

        self.state.tool = tool;
        debug!(?tool, "tool selected");
        self.settle();
    }

    pub fn set_parameters(&mut self, parameters: Parameters) {
        if self.state.parameters == parameters {
            return;
        }

        self.state.parameters = parameters;
        debug!(?parameters, "parameters updated");
        self.settle();
    }

    /// Restores the previous snapshot, returning false if there is none.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo().cloned() else {
            return false;
        };

        self.replay(snapshot);
        true
    }

    /// Restores the next snapshot, returning false if there is none.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo().cloned() else {
            return false;
        };

        self.replay(snapshot);
        true
    }

    /// Returns the request describing the current regions to the capacity service.
    pub fn capacity_request(&self) -> CapacityRequest {
        CapacityRequest::new(&self.state.regions, &self.state.parameters)
    }

    /// Sends the current regions to the given service and stores its outcome.
    ///
    /// Submitting never changes the regions.
    pub fn submit(&mut self, service: &impl CapacityService) -> &Calculation {
        let request = self.capacity_request();

        self.calculation.begin();
        let outcome = service.calculate(&request);
        self.calculation.complete(outcome);

        &self.calculation
    }

    pub fn calculation(&self) -> &Calculation {
        &self.calculation
    }

    /// Clears the error of the last submission, if any.
    pub fn dismiss_error(&mut self) {
        self.calculation.dismiss_error();
    }

    fn mint_id(&mut self) -> RegionId {
        let id = self.next_id.into();
        self.next_id += 1;
        id
    }

    fn replay(&mut self, snapshot: EditorState) {
        self.state = snapshot;
        self.replaying = true;
        self.settle();
    }

    /// Records the live state in the history, unless it results from a replay.
    fn settle(&mut self) {
        if std::mem::take(&mut self.replaying) {
            return;
        }

        self.history.push(self.state.clone());
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        cartesian::{Orientation, Ring},
        editor::{Commit, Editor, Parameters, Tool},
        region::RegionId,
    };

    fn square(min: [f64; 2], size: f64) -> Ring {
        let [x, y] = min;
        vec![[x, y], [x, y + size], [x + size, y + size], [x + size, y]].into()
    }

    #[test]
    fn commit_by_tool() {
        struct Test {
            name: &'static str,
            existing: Vec<Ring>,
            tool: Tool,
            drawing: Ring,
            want: Commit,
            want_regions: usize,
        }

        vec![
            Test {
                name: "add on empty set",
                existing: vec![],
                tool: Tool::Add,
                drawing: square([0., 0.], 10.),
                want: Commit::Created(1.into()),
                want_regions: 1,
            },
            Test {
                name: "add next to a region",
                existing: vec![square([0., 0.], 10.)],
                tool: Tool::Add,
                drawing: square([20., 20.], 5.),
                want: Commit::Created(2.into()),
                want_regions: 2,
            },
            Test {
                name: "add over a region",
                existing: vec![square([0., 0.], 10.)],
                tool: Tool::Add,
                drawing: square([5., 5.], 10.),
                want: Commit::Merged(vec![1.into()]),
                want_regions: 1,
            },
            Test {
                name: "remove over a region",
                existing: vec![square([0., 0.], 10.)],
                tool: Tool::Remove,
                drawing: square([5., 5.], 10.),
                want: Commit::Subtracted(vec![1.into()]),
                want_regions: 1,
            },
            Test {
                name: "remove over nothing",
                existing: vec![square([0., 0.], 10.)],
                tool: Tool::Remove,
                drawing: square([20., 20.], 5.),
                want: Commit::Discarded,
                want_regions: 1,
            },
            Test {
                name: "degenerate drawing",
                existing: vec![],
                tool: Tool::Add,
                drawing: vec![[0., 0.], [1., 1.], [2., 2.]].into(),
                want: Commit::Discarded,
                want_regions: 0,
            },
        ]
        .into_iter()
        .for_each(|test| {
            let mut editor = Editor::default();
            test.existing.into_iter().for_each(|ring| {
                editor.commit(ring);
            });

            editor.select_tool(test.tool);
            let history = editor.history().len();

            let got = editor.commit(test.drawing);
            assert_eq!(got, test.want, "{}", test.name);
            assert_eq!(editor.regions().len(), test.want_regions, "{}", test.name);

            let want_history = history + usize::from(got != Commit::Discarded);
            assert_eq!(editor.history().len(), want_history, "{}", test.name);
        });
    }

    #[test]
    fn remove_keeps_existing_holes() {
        let mut editor = Editor::default();
        editor.commit(square([0., 0.], 10.));
        editor.select_tool(Tool::Remove);

        // A hole in the middle, then a bite off a corner.
        editor.commit(square([4., 4.], 2.));
        editor.commit(square([8., 8.], 4.));

        let region = editor.regions().get(1.into()).expect("region should exist");
        assert_eq!(region.rings().len(), 2);
        assert_eq!(region.area(), 100. - 4. - 4.);
        assert_eq!(
            region.holes()[0].orientation(),
            Some(Orientation::Clockwise)
        );
    }

    #[test]
    fn lossy_merge_appends_the_drawing() {
        struct Test {
            name: &'static str,
            existing: Ring,
            tool: Tool,
            drawing: Ring,
            want: Commit,
            want_rings: Vec<Ring>,
            want_area: f64,
        }

        let notched: Ring = vec![
            [0., 0.],
            [10., 0.],
            [10., 4.],
            [4., 4.],
            [4., 10.],
            [0., 10.],
        ]
        .into();

        let notch: Ring = vec![[6., 6.], [9., 6.], [9., 9.], [6., 9.]].into();

        vec![
            Test {
                name: "add inside the notch of a region",
                existing: notched.clone(),
                tool: Tool::Add,
                drawing: notch.clone(),
                want: Commit::Merged(vec![1.into()]),
                want_rings: vec![notched, notch],
                want_area: 64. - 9.,
            },
            Test {
                name: "remove over a whole region",
                existing: square([0., 0.], 10.),
                tool: Tool::Remove,
                drawing: square([-1., -1.], 12.).reversed(),
                want: Commit::Subtracted(vec![1.into()]),
                want_rings: vec![square([0., 0.], 10.), square([-1., -1.], 12.)],
                want_area: 0.,
            },
        ]
        .into_iter()
        .for_each(|test| {
            let mut editor = Editor::default();
            editor.commit(test.existing);
            editor.select_tool(test.tool);

            let got = editor.commit(test.drawing);
            assert_eq!(got, test.want, "{}", test.name);
            assert_eq!(
                editor.regions().ids().collect::<Vec<_>>(),
                vec![RegionId::from(1)],
                "{}",
                test.name
            );

            let region = editor.regions().get(1.into()).expect("region should exist");
            assert_eq!(region.rings(), test.want_rings.as_slice(), "{}", test.name);
            assert_eq!(region.area(), test.want_area, "{}", test.name);
        });
    }

    #[test]
    fn identifiers_are_never_reused() {
        let mut editor = Editor::default();
        assert_eq!(editor.commit(square([0., 0.], 1.)), Commit::Created(1.into()));

        assert!(editor.undo());
        assert!(editor.regions().is_empty());

        assert_eq!(editor.commit(square([0., 0.], 1.)), Commit::Created(2.into()));
        editor.delete_region(2.into()).expect("region should exist");
        assert_eq!(editor.commit(square([5., 5.], 1.)), Commit::Created(3.into()));
    }

    #[test]
    fn replay_does_not_record() {
        let mut editor = Editor::default();
        editor.commit(square([0., 0.], 1.));
        editor.commit(square([5., 5.], 1.));
        assert_eq!(editor.history().len(), 3);

        assert!(editor.undo());
        assert!(editor.undo());
        assert!(!editor.undo());
        assert!(editor.redo());

        assert_eq!(editor.history().len(), 3);
        assert_eq!(editor.history().step(), 1);
        assert_eq!(editor.regions().ids().collect::<Vec<_>>(), vec![1.into()]);
    }

    #[test]
    fn tool_selection() {
        let mut editor = Editor::default();
        assert_eq!(editor.tool(), Tool::Add);

        editor.select_tool(Tool::Add);
        assert_eq!(editor.history().len(), 1);

        editor.select_tool(Tool::Remove);
        editor.select_tool(Tool::Remove);
        assert_eq!(editor.tool(), Tool::Remove);
        assert_eq!(editor.history().len(), 2);

        assert!(editor.undo());
        assert_eq!(editor.tool(), Tool::Add);
    }

    #[test]
    fn parameters_are_snapshotted() {
        let mut editor = Editor::default();
        let parameters = Parameters {
            barrier_size: 1.,
            person_radius: 2.,
        };

        editor.set_parameters(Parameters::default());
        assert_eq!(editor.history().len(), 1);

        editor.set_parameters(parameters);
        assert_eq!(editor.parameters(), parameters);

        assert!(editor.undo());
        assert_eq!(editor.parameters(), Parameters::default());
    }

    #[test]
    fn delete_and_reshape_unknown_region() {
        let mut editor = Editor::default();
        editor.commit(square([0., 0.], 1.));
        let unknown = RegionId::from(42);

        assert!(matches!(
            editor.delete_region(unknown),
            Err(Error::RegionNotFound(id)) if id == unknown
        ));

        assert!(matches!(
            editor.reshape_region(unknown, vec![square([0., 0.], 2.)]),
            Err(Error::RegionNotFound(id)) if id == unknown
        ));

        assert!(matches!(
            editor.reshape_region(1.into(), vec![]),
            Err(Error::EmptyRegion(id)) if id == RegionId::from(1)
        ));

        assert_eq!(editor.history().len(), 2);
    }

    #[test]
    fn reshape_region() {
        let mut editor = Editor::default();
        editor.commit(square([0., 0.], 1.));

        editor
            .reshape_region(1.into(), vec![square([0., 0.], 3.)])
            .expect("region should exist");

        let region = editor.regions().get(1.into()).expect("region should exist");
        assert_eq!(region.area(), 9.);
        assert_eq!(editor.history().len(), 3);

        assert!(editor.undo());
        let region = editor.regions().get(1.into()).expect("region should exist");
        assert_eq!(region.area(), 1.);
    }
}
