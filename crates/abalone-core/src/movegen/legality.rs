//! 合法性判定と指し手の実行
//!
//! `validate` は局面を変更せずに指し手を検査し、適用すべき変更の列（`MovePlan`）を返す。
//! `execute` はその変更を局面に書き込み、巻き戻し用の記録（`MoveRecord`）を返す。

use smallvec::SmallVec;

use crate::position::BoardState;
use crate::types::{line_from_to, line_to_edge, Cell, Direction, Marble, Move, Player};

/// 規則違反の理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum IllegalMove {
    #[error("only own marbles may be moved")]
    NotOwnMarble,
    #[error("only lines of up to three marbles may be moved")]
    TooManyMarbles,
    #[error("own marbles must not be moved off the board")]
    WouldMoveOffBoard,
    #[error("only lines that are shorter than the player's line can be pushed")]
    CannotPushLine,
    #[error("marbles must be pushed to an empty cell or off the board")]
    BlockedLanding,
    #[error("boundaries of a broadside move must not be off the board")]
    BoundaryOffBoard,
    #[error("only two or three neighboring marbles may be moved with a broadside move")]
    NotAStraightLineOfValidLength,
    #[error("the direction of a broadside move must be sideways")]
    DirectionMustBeSideways,
    #[error("with a broadside move, marbles can only be moved to empty cells")]
    DestinationMustBeEmpty,
}

/// 1マス分の変更
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub cell: Cell,
    pub before: Marble,
    pub after: Marble,
}

/// 変更の列（縦押しは最大3、横移動は最大6）
pub type CellChanges = SmallVec<[CellChange; 6]>;

/// `validate` の結果: 指し手を適用するための変更の列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePlan {
    pub changes: CellChanges,
    /// 相手の玉を盤外に押し出すか
    pub captured: bool,
}

/// 実行済みの指し手の記録（巻き戻しと差分ハッシュ更新に使う）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    /// 指した側
    pub player: Player,
    pub changes: CellChanges,
    pub captured: bool,
}

/// `player` の手として `mv` を検査する（局面は変更しない）
pub fn validate(board: &BoardState, player: Player, mv: Move) -> Result<MovePlan, IllegalMove> {
    match mv {
        Move::InLine { caboose, direction } => validate_in_line(board, player, caboose, direction),
        Move::Broadside {
            first,
            second,
            direction,
        } => validate_broadside(board, player, first, second, direction),
    }
}

/// `mv` を検査し、合法なら局面に適用する
///
/// 手番は交代しない（`BoardState::do_move` を参照）。
pub fn execute(board: &mut BoardState, player: Player, mv: Move) -> Result<MoveRecord, IllegalMove> {
    let plan = validate(board, player, mv)?;
    for change in &plan.changes {
        board.set(change.cell, change.after);
    }
    Ok(MoveRecord {
        mv,
        player,
        changes: plan.changes,
        captured: plan.captured,
    })
}

/// `player` の手として合法か
#[inline]
pub fn is_legal(board: &BoardState, player: Player, mv: Move) -> bool {
    validate(board, player, mv).is_ok()
}

fn validate_in_line(
    board: &BoardState,
    player: Player,
    caboose: Cell,
    direction: Direction,
) -> Result<MovePlan, IllegalMove> {
    let own = Marble::of(player);
    let opponent = Marble::of(!player);
    if caboose.is_off() || board.get(caboose) != own {
        return Err(IllegalMove::NotOwnMarble);
    }

    let line = line_to_edge(caboose, direction);
    let own_count = line.iter().take_while(|&&cell| board.get(cell) == own).count();
    if own_count > 3 {
        return Err(IllegalMove::TooManyMarbles);
    }
    if own_count == line.len() {
        return Err(IllegalMove::WouldMoveOffBoard);
    }
    let opponent_count =
        line[own_count..].iter().take_while(|&&cell| board.get(cell) == opponent).count();

    // 先頭の1つ先に自分の玉が入り、最後尾が空く
    let front = line[own_count];
    let mut changes = CellChanges::new();
    changes.push(CellChange {
        cell: caboose,
        before: own,
        after: Marble::Empty,
    });
    changes.push(CellChange {
        cell: front,
        before: board.get(front),
        after: own,
    });

    let mut captured = false;
    if opponent_count > 0 {
        if opponent_count >= own_count {
            return Err(IllegalMove::CannotPushLine);
        }
        match line.get(own_count + opponent_count) {
            None => captured = true,
            Some(&landing) => {
                // 相手の並びの直後は空か自分の玉
                if board.get(landing) == own {
                    return Err(IllegalMove::BlockedLanding);
                }
                changes.push(CellChange {
                    cell: landing,
                    before: Marble::Empty,
                    after: opponent,
                });
            }
        }
    }

    Ok(MovePlan { changes, captured })
}

fn validate_broadside(
    board: &BoardState,
    player: Player,
    first: Cell,
    second: Cell,
    direction: Direction,
) -> Result<MovePlan, IllegalMove> {
    if first.is_off() || second.is_off() {
        return Err(IllegalMove::BoundaryOffBoard);
    }
    let (line, line_direction) = line_from_to(first, second)
        .filter(|(line, _)| (2..=3).contains(&line.len()))
        .ok_or(IllegalMove::NotAStraightLineOfValidLength)?;
    if direction.is_parallel(line_direction) {
        return Err(IllegalMove::DirectionMustBeSideways);
    }

    let own = Marble::of(player);
    if line.iter().any(|&cell| board.get(cell) != own) {
        return Err(IllegalMove::NotOwnMarble);
    }
    let mut changes = CellChanges::new();
    for &cell in &line {
        changes.push(CellChange {
            cell,
            before: own,
            after: Marble::Empty,
        });
    }
    for &cell in &line {
        let dest = cell.neighbor(direction);
        if dest.is_off() || !board.get(dest).is_empty() {
            return Err(IllegalMove::DestinationMustBeEmpty);
        }
        changes.push(CellChange {
            cell: dest,
            before: Marble::Empty,
            after: own,
        });
    }

    Ok(MovePlan {
        changes,
        captured: false,
    })
}
