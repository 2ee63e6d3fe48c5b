use proptest::prelude::*;

use kanban_domain::{reorder, Column, Id};

fn board_columns(len: usize) -> Vec<Column> {
    (0..len as u64)
        .map(|i| Column::new(Id::new(i + 1), format!("column {}", i + 1)))
        .collect()
}

fn ids(columns: &[Column]) -> Vec<Id> {
    columns.iter().map(|c| c.id).collect()
}

proptest! {
    #[test]
    fn reorder_moves_active_to_target_index(len in 2usize..24, a in 0usize..24, b in 0usize..24) {
        prop_assume!(a < len && b < len && a != b);
        let columns = board_columns(len);
        let active = columns[a].id;
        let over = columns[b].id;

        let moved = reorder(&columns, active, over).expect("distinct present ids reorder");

        prop_assert_eq!(moved.len(), columns.len());
        prop_assert_eq!(moved[b].id, active);

        let mut sorted = ids(&moved);
        sorted.sort();
        prop_assert_eq!(sorted, ids(&columns));

        let others_before: Vec<Id> = ids(&columns).into_iter().filter(|id| *id != active).collect();
        let others_after: Vec<Id> = ids(&moved).into_iter().filter(|id| *id != active).collect();
        prop_assert_eq!(others_before, others_after);
    }

    #[test]
    fn reorder_onto_self_is_noop(len in 1usize..24, a in 0usize..24) {
        prop_assume!(a < len);
        let columns = board_columns(len);
        prop_assert!(reorder(&columns, columns[a].id, columns[a].id).is_none());
    }

    #[test]
    fn reorder_with_absent_id_is_noop(len in 0usize..24, a in 0usize..24) {
        let columns = board_columns(len);
        let missing = Id::new(1_000);
        let present = Id::new(a as u64 + 1);
        prop_assert!(reorder(&columns, missing, present).is_none());
        prop_assert!(reorder(&columns, present, missing).is_none());
    }
}
