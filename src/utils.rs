use crate::engine::Board;
use crate::error::BoardShapeError;

/// Parses a comma-separated list of tile numbers into a `Board`.
///
/// Tokens are trimmed of surrounding whitespace, so `"1, 2, 3"` and `"1,2,3"`
/// are equivalent. The list must name every tile `0..=24` exactly once, in
/// row-major order, with `0` standing for the blank.
///
/// # Errors
/// Returns a [`BoardShapeError`] if a token is not a number, a number is out of
/// range or repeated, or there are not exactly 25 tokens.
///
/// # Examples
/// ```
/// use puzzle24_solver::utils::board_from_csv;
///
/// let board = board_from_csv(
///     "1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16,17,18,19,20,21,22,23,24,0",
/// )
/// .unwrap();
/// assert!(board.is_goal());
///
/// assert!(board_from_csv("1,2,3").is_err());
/// assert!(board_from_csv("a,b,c").is_err());
/// ```
pub fn board_from_csv(s: &str) -> Result<Board, BoardShapeError> {
    let mut labels = Vec::with_capacity(25);
    for token in s.trim().split(',').map(str::trim) {
        let value: u32 = token.parse().map_err(|_| BoardShapeError::NotANumber {
            token: token.to_string(),
        })?;
        let label =
            u8::try_from(value).map_err(|_| BoardShapeError::TileOutOfRange { tile: value })?;
        labels.push(label);
    }
    Board::from_tiles(&labels)
}

/// Formats a board as the comma-separated form accepted by [`board_from_csv`].
pub fn board_to_csv(board: &Board) -> String {
    board
        .tiles()
        .iter()
        .map(|tile| tile.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
