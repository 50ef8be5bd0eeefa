//! Translation between the id-keyed remote TRIZ tables and the name-keyed
//! core model.
//!
//! The remote service identifies parameters and principles by database key
//! and official number. The core only knows names (for parameters) and
//! catalog ids (for principles). Everything crossing that boundary goes
//! through here.

use crate::wire::{ApiMatrixCell, ApiParameter, ApiPrinciple};
use triz_core::{ContradictionMatrix, PrincipleCatalog, PrincipleDraft, PrincipleId, TrizEngine};

/// Catalog id for a remote principle: matched by name, else its number.
pub fn principle_id(catalog: &PrincipleCatalog, principle: &ApiPrinciple) -> PrincipleId {
    catalog
        .id_of(&principle.name)
        .unwrap_or(principle.number)
}

/// Build a name-keyed matrix from remote matrix rows.
pub fn matrix_from_cells(cells: &[ApiMatrixCell], catalog: &PrincipleCatalog) -> ContradictionMatrix {
    ContradictionMatrix::from_entries(cells.iter().map(|cell| {
        let ids: Vec<PrincipleId> = cell
            .principles
            .iter()
            .map(|p| principle_id(catalog, p))
            .collect();
        (
            cell.improving_parameter.name.trim().to_string(),
            cell.worsening_parameter.name.trim().to_string(),
            ids,
        )
    }))
}

/// Official number of a parameter, matched case-insensitively by name.
pub fn parameter_number(parameters: &[ApiParameter], name: &str) -> Option<u32> {
    let name = name.trim().to_lowercase();
    parameters
        .iter()
        .find(|p| p.name.trim().to_lowercase() == name)
        .map(|p| p.number)
}

/// Register remote parameters the engine does not know yet.
///
/// Returns how many were added.
pub fn merge_parameters(engine: &mut TrizEngine, parameters: &[ApiParameter]) -> usize {
    let before = engine.parameters().len();
    for p in parameters {
        engine.add_parameter(&p.name);
    }
    engine.parameters().len() - before
}

/// Register remote principles whose names the catalog does not know yet.
///
/// Returns how many were added. Blank names are skipped.
pub fn merge_principles(engine: &mut TrizEngine, principles: &[ApiPrinciple]) -> usize {
    let mut added = 0;
    for p in principles {
        if p.name.trim().is_empty() || engine.principles().contains(&p.name) {
            continue;
        }
        let draft = PrincipleDraft::new(p.name.clone(), p.description.clone())
            .with_examples(p.examples.iter().cloned());
        match engine.add_principle(draft) {
            Ok(_) => added += 1,
            Err(err) => tracing::warn!(principle = %p.name, %err, "skipped remote principle"),
        }
    }
    added
}

/// Replace the engine's matrix with the remote one.
///
/// Remote principles are merged first so every cell id resolves.
pub fn sync_matrix(
    engine: &mut TrizEngine,
    principles: &[ApiPrinciple],
    cells: &[ApiMatrixCell],
) -> usize {
    merge_principles(engine, principles);
    for cell in cells {
        merge_principles(engine, &cell.principles);
    }
    let matrix = matrix_from_cells(cells, engine.principles());
    let size = matrix.len();
    engine.replace_matrix(matrix);
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(number: u32, name: &str) -> ApiParameter {
        ApiParameter {
            id: u64::from(number) + 100,
            number,
            name: name.to_string(),
            description: String::new(),
        }
    }

    fn principle(number: u32, name: &str) -> ApiPrinciple {
        ApiPrinciple {
            id: u64::from(number) + 500,
            number,
            name: name.to_string(),
            description: "remote".to_string(),
            examples: vec![],
        }
    }

    #[test]
    fn cells_become_name_keyed() {
        let catalog = PrincipleCatalog::new();
        let cells = vec![ApiMatrixCell {
            id: 1,
            improving_parameter: param(9, "Speed"),
            worsening_parameter: param(21, "Power"),
            principles: vec![principle(35, "Parameter changes"), principle(1, "Segmentation")],
        }];

        let matrix = matrix_from_cells(&cells, &catalog);
        assert!(matrix.is_known("Speed", "Power"));
        assert!(!matrix.is_known("Power", "Speed"));
        assert_eq!(matrix.resolve("Speed", "Power"), vec![35, 1]);
    }

    #[test]
    fn parameter_numbers_match_by_name() {
        let params = vec![param(9, "Speed"), param(21, "Power")];
        assert_eq!(parameter_number(&params, " speed "), Some(9));
        assert_eq!(parameter_number(&params, "Weight"), None);
    }

    #[test]
    fn unknown_remote_principles_become_custom() {
        let mut engine = TrizEngine::new();
        let added = merge_principles(
            &mut engine,
            &[principle(1, "segmentation"), principle(41, "Self-healing")],
        );
        assert_eq!(added, 1);
        assert_eq!(engine.principles().id_of("Self-healing"), Some(41));
    }

    #[test]
    fn synced_matrix_resolves_through_engine() {
        let mut engine = TrizEngine::new();
        let cells = vec![ApiMatrixCell {
            id: 1,
            improving_parameter: param(39, "Productivity"),
            worsening_parameter: param(36, "Device complexity"),
            principles: vec![principle(50, "Swarm assembly"), principle(10, "Preliminary action")],
        }];

        assert_eq!(sync_matrix(&mut engine, &[], &cells), 1);
        assert_eq!(
            engine.suggest_principles("Productivity", "Device complexity"),
            vec!["Swarm assembly", "Preliminary action"]
        );
    }
}
