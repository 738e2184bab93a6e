//! Frame model - main structural model container

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::analysis::AnalysisOptions;
use crate::elements::{Material, Member, Node, Section, Support};
use crate::error::{FrameError, FrameResult};
use crate::loads::{DistributedLoad, LoadCombination, NodeLoad, PointLoad};
use crate::math::{self, Mat, Mat3, Vec as FEVec, Vec12};
use crate::results::{
    LocalPointLoad, MemberForces, MemberInternalForces, NodeDisplacement, Reactions,
};

/// Lifecycle phase of a model
///
/// Building is only possible before or after a solve (a mutation of a
/// solved model drops it back to `Built`); result queries are only
/// possible in `Solved`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No entities added yet
    #[default]
    Empty,
    /// Entities present, no valid solution
    Built,
    /// A successful analysis is available
    Solved,
}

/// The main 3D frame model
///
/// Entities are stored by name and only mutable through the `add_*`
/// methods, which keep the lifecycle phase consistent with the stored
/// results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameModel {
    /// Nodes in the model
    pub(crate) nodes: HashMap<String, Node>,
    /// Materials in the model
    pub(crate) materials: HashMap<String, Material>,
    /// Sections in the model
    pub(crate) sections: HashMap<String, Section>,
    /// Members (frame elements) in the model
    pub(crate) members: HashMap<String, Member>,
    /// Support conditions at nodes
    pub(crate) supports: HashMap<String, Support>,
    /// Node loads
    pub(crate) node_loads: HashMap<String, Vec<NodeLoad>>,
    /// Member point loads
    pub(crate) member_point_loads: HashMap<String, Vec<PointLoad>>,
    /// Member distributed loads
    pub(crate) member_dist_loads: HashMap<String, Vec<DistributedLoad>>,
    /// Load combinations
    pub(crate) load_combos: HashMap<String, LoadCombination>,

    /// Lifecycle phase
    #[serde(skip)]
    phase: Phase,
}

impl Default for FrameModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameModel {
    /// Name of the load combination synthesized when none is registered
    pub const DEFAULT_COMBO: &'static str = "Combo 1";

    /// Name of the load case the default combination carries at factor 1.0
    pub const DEFAULT_CASE: &'static str = "Case 1";

    /// Create a new empty model
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            materials: HashMap::new(),
            sections: HashMap::new(),
            members: HashMap::new(),
            supports: HashMap::new(),
            node_loads: HashMap::new(),
            member_point_loads: HashMap::new(),
            member_dist_loads: HashMap::new(),
            load_combos: HashMap::new(),
            phase: Phase::Empty,
        }
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if the model holds a valid solution
    pub fn is_analyzed(&self) -> bool {
        self.phase == Phase::Solved
    }

    /// Mark the model as mutated, invalidating any prior solution
    fn touch(&mut self) {
        self.phase = Phase::Built;
    }

    // ========================
    // Model Building Methods
    // ========================

    /// Add a node to the model
    pub fn add_node(&mut self, name: &str, node: Node) -> FrameResult<()> {
        if self.nodes.contains_key(name) {
            return Err(FrameError::DuplicateName(name.to_string()));
        }
        self.nodes.insert(name.to_string(), node);
        self.touch();
        Ok(())
    }

    /// Add a material to the model
    pub fn add_material(&mut self, name: &str, material: Material) -> FrameResult<()> {
        if self.materials.contains_key(name) {
            return Err(FrameError::DuplicateName(name.to_string()));
        }
        if material.e <= 0.0 || material.g <= 0.0 {
            return Err(FrameError::InvalidProperty(format!(
                "material '{}' must have positive moduli (E={}, G={})",
                name, material.e, material.g
            )));
        }
        self.materials.insert(name.to_string(), material);
        self.touch();
        Ok(())
    }

    /// Add a section to the model
    pub fn add_section(&mut self, name: &str, section: Section) -> FrameResult<()> {
        if self.sections.contains_key(name) {
            return Err(FrameError::DuplicateName(name.to_string()));
        }
        if !section.is_physical() {
            return Err(FrameError::InvalidProperty(format!(
                "section '{}' must have positive A, Iy, Iz and J (A={}, Iy={}, Iz={}, J={})",
                name, section.a, section.iy, section.iz, section.j
            )));
        }
        self.sections.insert(name.to_string(), section);
        self.touch();
        Ok(())
    }

    /// Add a member to the model
    pub fn add_member(&mut self, name: &str, member: Member) -> FrameResult<()> {
        // Validate references
        if !self.nodes.contains_key(&member.i_node) {
            return Err(FrameError::NodeNotFound(member.i_node.clone()));
        }
        if !self.nodes.contains_key(&member.j_node) {
            return Err(FrameError::NodeNotFound(member.j_node.clone()));
        }
        if !self.materials.contains_key(&member.material) {
            return Err(FrameError::MaterialNotFound(member.material.clone()));
        }
        if !self.sections.contains_key(&member.section) {
            return Err(FrameError::SectionNotFound(member.section.clone()));
        }
        if self.members.contains_key(name) {
            return Err(FrameError::DuplicateName(name.to_string()));
        }

        self.members.insert(name.to_string(), member);
        self.touch();
        Ok(())
    }

    /// Add a support condition
    pub fn add_support(&mut self, node_name: &str, support: Support) -> FrameResult<()> {
        if !self.nodes.contains_key(node_name) {
            return Err(FrameError::NodeNotFound(node_name.to_string()));
        }
        if self.supports.contains_key(node_name) {
            return Err(FrameError::DuplicateName(node_name.to_string()));
        }
        self.supports.insert(node_name.to_string(), support);
        self.touch();
        Ok(())
    }

    /// Add a node load
    pub fn add_node_load(&mut self, node_name: &str, load: NodeLoad) -> FrameResult<()> {
        if !self.nodes.contains_key(node_name) {
            return Err(FrameError::NodeNotFound(node_name.to_string()));
        }
        self.node_loads
            .entry(node_name.to_string())
            .or_default()
            .push(load);
        self.touch();
        Ok(())
    }

    /// Add a point load to a member
    pub fn add_member_point_load(&mut self, member_name: &str, load: PointLoad) -> FrameResult<()> {
        if !self.members.contains_key(member_name) {
            return Err(FrameError::MemberNotFound(member_name.to_string()));
        }
        self.member_point_loads
            .entry(member_name.to_string())
            .or_default()
            .push(load);
        self.touch();
        Ok(())
    }

    /// Add a distributed load to a member
    pub fn add_member_dist_load(
        &mut self,
        member_name: &str,
        load: DistributedLoad,
    ) -> FrameResult<()> {
        if !self.members.contains_key(member_name) {
            return Err(FrameError::MemberNotFound(member_name.to_string()));
        }
        self.member_dist_loads
            .entry(member_name.to_string())
            .or_default()
            .push(load);
        self.touch();
        Ok(())
    }

    /// Add a load combination
    pub fn add_load_combo(&mut self, combo: LoadCombination) -> FrameResult<()> {
        let name = combo.name.clone();
        if self.load_combos.contains_key(&name) {
            return Err(FrameError::DuplicateName(name));
        }
        self.load_combos.insert(name, combo);
        self.touch();
        Ok(())
    }

    // ========================
    // Analysis Methods
    // ========================

    /// Run linear static analysis with default options
    pub fn analyze_linear(&mut self) -> FrameResult<()> {
        self.analyze(AnalysisOptions::default())
    }

    /// Run linear static analysis with custom options
    pub fn analyze(&mut self, options: AnalysisOptions) -> FrameResult<()> {
        if self.nodes.is_empty() {
            return Err(FrameError::AnalysisFailed(
                "model has no nodes".to_string(),
            ));
        }

        // Ensure at least one load combination exists
        if self.load_combos.is_empty() {
            self.load_combos.insert(
                Self::DEFAULT_COMBO.to_string(),
                LoadCombination::single(Self::DEFAULT_COMBO, Self::DEFAULT_CASE),
            );
        }

        self.prepare_model()?;

        // A model with no restrained DOF cannot be in equilibrium
        let restrained: usize = self.supports.values().map(|s| s.num_restrained()).sum();
        if restrained == 0 {
            return Err(FrameError::Unstable(
                "no restrained degrees of freedom".to_string(),
            ));
        }

        info!(
            "analyzing model: {} nodes, {} members, {} combinations",
            self.nodes.len(),
            self.members.len(),
            self.load_combos.len()
        );

        let (k_global, dof_map) = self.build_global_stiffness()?;

        let combo_names: Vec<String> = self.load_combos.keys().cloned().collect();

        for combo_name in &combo_names {
            let combo = self.load_combos.get(combo_name).unwrap().clone();
            debug!("solving load combination '{}'", combo_name);

            let p_global = self.build_load_vector(&combo, &dof_map)?;

            self.solve_linear(&k_global, &p_global, &dof_map, combo_name)?;

            self.calculate_member_forces(combo_name)?;
            self.calculate_reactions(combo_name)?;

            if options.check_statics {
                self.check_statics(combo_name, &p_global, &dof_map, options.statics_tolerance)?;
            }
        }

        self.phase = Phase::Solved;
        Ok(())
    }

    /// Prepare model for analysis (assign IDs, calculate lengths, validate load positions)
    fn prepare_model(&mut self) -> FrameResult<()> {
        for (i, node) in self.nodes.values_mut().enumerate() {
            node.id = Some(i);
        }

        for member in self.members.values_mut() {
            let i_node = self.nodes.get(&member.i_node).unwrap();
            let j_node = self.nodes.get(&member.j_node).unwrap();
            let length = i_node.distance_to(j_node);

            if length < 1e-10 {
                return Err(FrameError::InvalidGeometry(format!(
                    "member has zero length: i={}, j={}",
                    member.i_node, member.j_node
                )));
            }

            member.length = Some(length);
        }

        // Point load positions must fall on the member
        for (member_name, loads) in &self.member_point_loads {
            let length = self.members.get(member_name).unwrap().length.unwrap();
            for load in loads {
                if load.position < 0.0 || load.position > length {
                    return Err(FrameError::OutOfRange {
                        position: load.position,
                        length,
                    });
                }
            }
        }

        Ok(())
    }

    /// Direction cosine matrix for a member, by name
    fn rotation_matrix(&self, member: &Member) -> Mat3 {
        let i_node = self.nodes.get(&member.i_node).unwrap();
        let j_node = self.nodes.get(&member.j_node).unwrap();
        math::member_rotation_matrix(&i_node.coords(), &j_node.coords(), member.rotation)
    }

    /// Resolve a distributed load into local per-axis end intensities,
    /// scaled by the combination factor
    ///
    /// Returns [[w1, w2]; 3] indexed by local axis.
    fn resolve_dist_load(load: &DistributedLoad, r: &Mat3, factor: f64) -> [[f64; 2]; 3] {
        let mut components = [[0.0; 2]; 3];

        if let Some(axis) = load.direction.local_axis() {
            components[axis] = [factor * load.w1, factor * load.w2];
        } else if let Some(e) = load.direction.global_vector() {
            // Project the global intensity vector onto the local axes
            let g1 = nalgebra::Vector3::new(e[0], e[1], e[2]) * (factor * load.w1);
            let g2 = nalgebra::Vector3::new(e[0], e[1], e[2]) * (factor * load.w2);
            let l1 = r * g1;
            let l2 = r * g2;
            for axis in 0..3 {
                components[axis] = [l1[axis], l2[axis]];
            }
        }

        components
    }

    /// Resolve a point load into local per-axis magnitudes,
    /// scaled by the combination factor
    fn resolve_point_load(load: &PointLoad, r: &Mat3, factor: f64) -> [f64; 3] {
        let mut components = [0.0; 3];

        if let Some(axis) = load.direction.local_axis() {
            components[axis] = factor * load.magnitude;
        } else if let Some(e) = load.direction.global_vector() {
            let g = nalgebra::Vector3::new(e[0], e[1], e[2]) * (factor * load.magnitude);
            let l = r * g;
            for axis in 0..3 {
                components[axis] = l[axis];
            }
        }

        components
    }

    /// Fixed end reactions for all loads on a member, in local coordinates
    fn member_fer(
        &self,
        member_name: &str,
        member: &Member,
        combo: &LoadCombination,
        r: &Mat3,
    ) -> Vec12 {
        let length = member.length.unwrap();
        let mut fer = Vec12::zeros();

        if let Some(loads) = self.member_dist_loads.get(member_name) {
            for load in loads {
                let factor = combo.factor(&load.case);
                if factor.abs() < 1e-10 {
                    continue;
                }
                let components = Self::resolve_dist_load(load, r, factor);
                for (axis, w) in components.iter().enumerate() {
                    if w[0].abs() > 1e-12 || w[1].abs() > 1e-12 {
                        fer += math::fer_linear_load(w[0], w[1], length, axis);
                    }
                }
            }
        }

        if let Some(loads) = self.member_point_loads.get(member_name) {
            for load in loads {
                let factor = combo.factor(&load.case);
                if factor.abs() < 1e-10 {
                    continue;
                }
                let components = Self::resolve_point_load(load, r, factor);
                for (axis, &p) in components.iter().enumerate() {
                    if p.abs() > 1e-12 {
                        fer += math::fer_point_load(p, load.position, length, axis);
                    }
                }
            }
        }

        fer
    }

    /// Build the global stiffness matrix
    fn build_global_stiffness(&self) -> FrameResult<(Mat, HashMap<String, usize>)> {
        let n_dofs = self.nodes.len() * 6;
        let mut k_global = Mat::zeros(n_dofs, n_dofs);

        // Map node names to DOF indices
        let mut dof_map: HashMap<String, usize> = HashMap::new();
        for (name, node) in &self.nodes {
            dof_map.insert(name.clone(), node.id.unwrap() * 6);
        }

        for member in self.members.values() {
            let i_node = self.nodes.get(&member.i_node).unwrap();
            let j_node = self.nodes.get(&member.j_node).unwrap();
            let material = self.materials.get(&member.material).unwrap();
            let section = self.sections.get(&member.section).unwrap();
            let length = member.length.unwrap();

            let k_local = math::member_local_stiffness(
                material.e, material.g, section.a, section.iy, section.iz, section.j, length,
            );

            let t = math::member_transformation_matrix(
                &i_node.coords(),
                &j_node.coords(),
                member.rotation,
            );

            // Transform to global: K_global = T^T * K_local * T
            let k_member_global = t.transpose() * k_local * t;

            let i_dof = dof_map[&member.i_node];
            let j_dof = dof_map[&member.j_node];

            for a in 0..6 {
                for b in 0..6 {
                    k_global[(i_dof + a, i_dof + b)] += k_member_global[(a, b)];
                    k_global[(i_dof + a, j_dof + b)] += k_member_global[(a, b + 6)];
                    k_global[(j_dof + a, i_dof + b)] += k_member_global[(a + 6, b)];
                    k_global[(j_dof + a, j_dof + b)] += k_member_global[(a + 6, b + 6)];
                }
            }
        }

        Ok((k_global, dof_map))
    }

    /// Build the global load vector for a load combination
    fn build_load_vector(
        &self,
        combo: &LoadCombination,
        dof_map: &HashMap<String, usize>,
    ) -> FrameResult<FEVec> {
        let n_dofs = self.nodes.len() * 6;
        let mut p = FEVec::zeros(n_dofs);

        // Node loads
        for (node_name, loads) in &self.node_loads {
            let dof = dof_map[node_name];

            for load in loads {
                let factor = combo.factor(&load.case);
                if factor.abs() > 1e-10 {
                    let load_arr = load.as_array();
                    for i in 0..6 {
                        p[dof + i] += factor * load_arr[i];
                    }
                }
            }
        }

        // Nodal-equivalent forces from member loads
        for (member_name, member) in &self.members {
            let r = self.rotation_matrix(member);
            let fer_local = self.member_fer(member_name, member, combo, &r);

            let i_node = self.nodes.get(&member.i_node).unwrap();
            let j_node = self.nodes.get(&member.j_node).unwrap();
            let t = math::member_transformation_matrix(
                &i_node.coords(),
                &j_node.coords(),
                member.rotation,
            );

            let fer_global = t.transpose() * fer_local;

            // FER are reactions, so they enter the load vector negated
            let i_dof = dof_map[&member.i_node];
            let j_dof = dof_map[&member.j_node];

            for i in 0..6 {
                p[i_dof + i] -= fer_global[i];
                p[j_dof + i] -= fer_global[i + 6];
            }
        }

        Ok(p)
    }

    /// Solve the linear system with support conditions applied
    fn solve_linear(
        &mut self,
        k_global: &Mat,
        p_global: &FEVec,
        dof_map: &HashMap<String, usize>,
        combo_name: &str,
    ) -> FrameResult<()> {
        let n_dofs = self.nodes.len() * 6;

        // Identify free and restrained DOFs
        let mut free_dofs: Vec<usize> = Vec::new();

        for node_name in self.nodes.keys() {
            let base_dof = dof_map[node_name];

            if let Some(support) = self.supports.get(node_name) {
                let restraints = support.as_array();
                for (i, &restrained) in restraints.iter().enumerate() {
                    if !restrained {
                        free_dofs.push(base_dof + i);
                    }
                }
            } else {
                for i in 0..6 {
                    free_dofs.push(base_dof + i);
                }
            }
        }

        if free_dofs.is_empty() {
            return Err(FrameError::AnalysisFailed(
                "no free degrees of freedom".to_string(),
            ));
        }

        // Partition stiffness matrix and load vector to the free DOFs
        let n_free = free_dofs.len();
        let mut k11 = Mat::zeros(n_free, n_free);
        let mut p1 = FEVec::zeros(n_free);

        for (i, &di) in free_dofs.iter().enumerate() {
            p1[i] = p_global[di];
            for (j, &dj) in free_dofs.iter().enumerate() {
                k11[(i, j)] = k_global[(di, dj)];
            }
        }

        // Solve K11 * D1 = P1
        let d1 = match math::solve_linear_system(&k11, &p1) {
            Some(d) => d,
            None => return Err(FrameError::SingularMatrix),
        };

        // Assemble full displacement vector (restrained DOFs stay zero)
        let mut d_full = FEVec::zeros(n_dofs);
        for (i, &di) in free_dofs.iter().enumerate() {
            d_full[di] = d1[i];
        }

        // Store nodal displacements
        for (node_name, node) in self.nodes.iter_mut() {
            let base_dof = dof_map[node_name];
            let disp = [
                d_full[base_dof],
                d_full[base_dof + 1],
                d_full[base_dof + 2],
                d_full[base_dof + 3],
                d_full[base_dof + 4],
                d_full[base_dof + 5],
            ];
            node.displacements.insert(combo_name.to_string(), disp);
        }

        Ok(())
    }

    /// Recover member local end forces from nodal displacements
    ///
    /// F_total = K_local * d_local + FER, where FER accounts for the loads
    /// applied between the member's ends (PyNite's approach).
    fn calculate_member_forces(&mut self, combo_name: &str) -> FrameResult<()> {
        let combo = self
            .load_combos
            .get(combo_name)
            .cloned()
            .ok_or_else(|| FrameError::LoadCombinationNotFound(combo_name.to_string()))?;

        let member_names: Vec<String> = self.members.keys().cloned().collect();

        for member_name in member_names {
            let member = self.members.get(&member_name).unwrap();
            let i_node = self.nodes.get(&member.i_node).unwrap();
            let j_node = self.nodes.get(&member.j_node).unwrap();
            let material = self.materials.get(&member.material).unwrap();
            let section = self.sections.get(&member.section).unwrap();
            let length = member.length.unwrap();

            let d_i = i_node
                .displacements
                .get(combo_name)
                .ok_or(FrameError::NotAnalyzed)?;
            let d_j = j_node
                .displacements
                .get(combo_name)
                .ok_or(FrameError::NotAnalyzed)?;

            let d_global = Vec12::from_iterator(d_i.iter().chain(d_j.iter()).copied());

            let t = math::member_transformation_matrix(
                &i_node.coords(),
                &j_node.coords(),
                member.rotation,
            );

            let d_local = t * d_global;

            let k_local = math::member_local_stiffness(
                material.e, material.g, section.a, section.iy, section.iz, section.j, length,
            );

            // Elastic forces from nodal displacements plus fixed end reactions
            let r = self.rotation_matrix(member);
            let f_local = k_local * d_local + self.member_fer(&member_name, member, &combo, &r);

            let mut forces = [0.0; 12];
            for i in 0..12 {
                forces[i] = f_local[i];
            }

            let member = self.members.get_mut(&member_name).unwrap();
            member.local_forces.insert(combo_name.to_string(), forces);
        }

        Ok(())
    }

    /// Calculate reactions at supports by summing member end forces
    fn calculate_reactions(&mut self, combo_name: &str) -> FrameResult<()> {
        let mut all_reactions: HashMap<String, [f64; 6]> = HashMap::new();

        for (node_name, support) in &self.supports {
            if !support.is_supported() {
                continue;
            }
            all_reactions.insert(node_name.clone(), [0.0; 6]);
        }

        // Sum global end forces from connected members
        for member in self.members.values() {
            let forces = member
                .local_forces
                .get(combo_name)
                .ok_or(FrameError::NotAnalyzed)?;

            let i_node = self.nodes.get(&member.i_node).unwrap();
            let j_node = self.nodes.get(&member.j_node).unwrap();

            let t = math::member_transformation_matrix(
                &i_node.coords(),
                &j_node.coords(),
                member.rotation,
            );

            let f_local = Vec12::from_iterator(forces.iter().copied());
            let f_global = t.transpose() * f_local;

            if let Some(reactions) = all_reactions.get_mut(&member.i_node) {
                for i in 0..6 {
                    reactions[i] += f_global[i];
                }
            }
            if let Some(reactions) = all_reactions.get_mut(&member.j_node) {
                for i in 0..6 {
                    reactions[i] += f_global[i + 6];
                }
            }
        }

        // Subtract loads applied directly at supported nodes
        for (node_name, reactions) in &mut all_reactions {
            if let Some(loads) = self.node_loads.get(node_name) {
                let combo = self.load_combos.get(combo_name).unwrap();
                for load in loads {
                    let factor = combo.factor(&load.case);
                    let load_arr = load.as_array();
                    for i in 0..6 {
                        reactions[i] -= factor * load_arr[i];
                    }
                }
            }
        }

        // Store reactions, masked to restrained DOFs
        for (node_name, mut reactions) in all_reactions {
            if let Some(support) = self.supports.get(&node_name) {
                let mask = support.as_array();
                for i in 0..6 {
                    if !mask[i] {
                        reactions[i] = 0.0;
                    }
                }
            }

            if let Some(node) = self.nodes.get_mut(&node_name) {
                node.reactions.insert(combo_name.to_string(), reactions);
            }
        }

        Ok(())
    }

    /// Verify global force equilibrium: reactions must balance the applied
    /// nodal-equivalent loads in each global direction
    fn check_statics(
        &self,
        combo_name: &str,
        p_global: &FEVec,
        dof_map: &HashMap<String, usize>,
        tolerance: f64,
    ) -> FrameResult<()> {
        for dir in 0..3 {
            let mut applied = 0.0;
            for node_name in self.nodes.keys() {
                applied += p_global[dof_map[node_name] + dir];
            }

            let mut reaction = 0.0;
            for node in self.nodes.values() {
                if let Some(rxn) = node.reactions.get(combo_name) {
                    reaction += rxn[dir];
                }
            }

            let residual = applied + reaction;
            if residual.abs() > tolerance * applied.abs().max(1.0) {
                return Err(FrameError::AnalysisFailed(format!(
                    "static equilibrium check failed for '{}': direction {} residual {:.6e}",
                    combo_name, dir, residual
                )));
            }
        }

        debug!("static equilibrium check passed for '{}'", combo_name);
        Ok(())
    }

    // ========================
    // Result Access Methods
    // ========================

    fn require_solved(&self) -> FrameResult<()> {
        if self.phase != Phase::Solved {
            return Err(FrameError::NotAnalyzed);
        }
        Ok(())
    }

    /// Get node displacement
    pub fn node_displacement(
        &self,
        node_name: &str,
        combo_name: &str,
    ) -> FrameResult<NodeDisplacement> {
        self.require_solved()?;
        let node = self
            .nodes
            .get(node_name)
            .ok_or_else(|| FrameError::NodeNotFound(node_name.to_string()))?;

        let disp = node
            .displacements
            .get(combo_name)
            .ok_or(FrameError::NotAnalyzed)?;

        Ok(NodeDisplacement::from_array(*disp))
    }

    /// Get node reactions
    pub fn node_reactions(&self, node_name: &str, combo_name: &str) -> FrameResult<Reactions> {
        self.require_solved()?;
        let node = self
            .nodes
            .get(node_name)
            .ok_or_else(|| FrameError::NodeNotFound(node_name.to_string()))?;

        let rxn = node
            .reactions
            .get(combo_name)
            .ok_or(FrameError::NotAnalyzed)?;

        Ok(Reactions::from_array(*rxn))
    }

    /// Get the length of a member (requires a solved model)
    pub fn member_length(&self, member_name: &str) -> FrameResult<f64> {
        self.require_solved()?;
        let member = self
            .members
            .get(member_name)
            .ok_or_else(|| FrameError::MemberNotFound(member_name.to_string()))?;
        member.length.ok_or(FrameError::NotAnalyzed)
    }

    /// Get member local end forces at the i-node
    pub fn member_forces_i(&self, member_name: &str, combo_name: &str) -> FrameResult<MemberForces> {
        self.require_solved()?;
        let member = self
            .members
            .get(member_name)
            .ok_or_else(|| FrameError::MemberNotFound(member_name.to_string()))?;

        let forces = member
            .local_forces
            .get(combo_name)
            .ok_or(FrameError::NotAnalyzed)?;

        Ok(MemberForces::from_i_node_forces(forces))
    }

    /// Get member local end forces at the j-node
    pub fn member_forces_j(&self, member_name: &str, combo_name: &str) -> FrameResult<MemberForces> {
        self.require_solved()?;
        let member = self
            .members
            .get(member_name)
            .ok_or_else(|| FrameError::MemberNotFound(member_name.to_string()))?;

        let forces = member
            .local_forces
            .get(combo_name)
            .ok_or(FrameError::NotAnalyzed)?;

        Ok(MemberForces::from_j_node_forces(forces))
    }

    /// Get the internal force fields along a member for a load combination
    ///
    /// The returned value evaluates axial/shear/torque/moment at any position
    /// x ∈ [0, L] from the i-node, in the member's local coordinate frame.
    pub fn member_internal_forces(
        &self,
        member_name: &str,
        combo_name: &str,
    ) -> FrameResult<MemberInternalForces> {
        self.require_solved()?;
        let member = self
            .members
            .get(member_name)
            .ok_or_else(|| FrameError::MemberNotFound(member_name.to_string()))?;

        let combo = self
            .load_combos
            .get(combo_name)
            .ok_or_else(|| FrameError::LoadCombinationNotFound(combo_name.to_string()))?;

        let end_forces = member
            .local_forces
            .get(combo_name)
            .ok_or(FrameError::NotAnalyzed)?;

        let length = member.length.ok_or(FrameError::NotAnalyzed)?;
        let r = self.rotation_matrix(member);

        // Accumulate factored member loads in local coordinates
        let mut w0 = [0.0; 3];
        let mut slope = [0.0; 3];
        if let Some(loads) = self.member_dist_loads.get(member_name) {
            for load in loads {
                let factor = combo.factor(&load.case);
                if factor.abs() < 1e-10 {
                    continue;
                }
                let components = Self::resolve_dist_load(load, &r, factor);
                for (axis, w) in components.iter().enumerate() {
                    w0[axis] += w[0];
                    slope[axis] += (w[1] - w[0]) / length;
                }
            }
        }

        let mut point_loads = Vec::new();
        if let Some(loads) = self.member_point_loads.get(member_name) {
            for load in loads {
                let factor = combo.factor(&load.case);
                if factor.abs() < 1e-10 {
                    continue;
                }
                let components = Self::resolve_point_load(load, &r, factor);
                for (axis, &p) in components.iter().enumerate() {
                    if p.abs() > 1e-12 {
                        point_loads.push(LocalPointLoad {
                            axis,
                            magnitude: p,
                            position: load.position,
                        });
                    }
                }
            }
        }

        Ok(MemberInternalForces::new(
            length,
            *end_forces,
            w0,
            slope,
            point_loads,
        ))
    }

    /// Look up a node by name
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    /// Look up a member by name
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.get(name)
    }

    /// Look up a material by name
    pub fn material(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }

    /// Look up a section by name
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Look up the support at a node, if one is registered
    pub fn support(&self, node_name: &str) -> Option<&Support> {
        self.supports.get(node_name)
    }

    /// Get all load combination names
    pub fn combo_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.load_combos.keys().cloned().collect();
        names.sort();
        names
    }
}
