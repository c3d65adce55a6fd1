use crate::ship::ShipType;

/// Edge length of a standard board.
pub const DEFAULT_BOARD_SIZE: usize = 10;
pub const NUM_SHIP_TYPES: usize = 5;
/// Longest ship in the fleet; sizes the fixed damage array in [`Ship`](crate::Ship).
pub const MAX_SHIP_LENGTH: usize = 5;
pub const SHIP_TYPES: [ShipType; NUM_SHIP_TYPES] = [
    ShipType::Patrol,
    ShipType::Destroyer,
    ShipType::Submarine,
    ShipType::Battleship,
    ShipType::Carrier,
];

/// Total number of ship segments in a full fleet.
pub const TOTAL_SHIP_CELLS: usize = 2 + 3 + 3 + 4 + 5;

/// Fractional marker added to a ship id in the numeric target-grid encoding
/// to flag the cell where that ship sank.
pub const SUNK_OFFSET: f64 = 0.1;

/// Convert a ship name to its [`ShipType`]. Matching is case-insensitive and
/// accepts "sub" for the submarine. Returns `None` for unknown names.
pub fn ship_type_for_name(name: &str) -> Option<ShipType> {
    let name = name.trim();
    if name.eq_ignore_ascii_case("sub") {
        return Some(ShipType::Submarine);
    }
    SHIP_TYPES
        .iter()
        .copied()
        .find(|t| t.name().eq_ignore_ascii_case(name))
}
