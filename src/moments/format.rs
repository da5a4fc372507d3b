use crate::Float;
use crate::moments::{flat_index,is_in_range};

/// One row per j, columns i = 0..=order. Slots with i+j > order are printed as x.
pub fn format_moment_grid(values: &[Float], order: usize) -> String {
    assert_eq!(values.len(), (order+1)*(order+1));
    let mut grid = String::new();
    for j in 0..=order {
        let row = (0..=order).map(|i| match is_in_range(i, j, order) {
            true => format!("{:>12.6}", values[flat_index(i, j, order)]),
            false => format!("{:>12}", "x")
        }).collect::<Vec<String>>();
        grid.push_str(row.join(" ").as_str());
        grid.push('\n');
    }
    grid
}
