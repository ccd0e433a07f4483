use crate::model::*;

pub fn inc_tile(tt: &mut TileTable, tile: Tile) {
    let t = tile;
    tt[t.0][t.1] += 1;
    if t.1 == 0 {
        // 0は赤5のフラグなので本来の5もたてる
        tt[t.0][5] += 1;
    }
}

pub fn tiles_from_tile_table(tt: &TileTable) -> Vec<Tile> {
    let mut hand = vec![];
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            for c in 0..tt[ti][ni] {
                if ti != TZ && ni == 5 && c < tt[ti][0] {
                    hand.push(Tile(ti, 0)); // 赤5
                } else {
                    hand.push(Tile(ti, ni));
                }
            }
        }
    }
    hand
}

pub fn tiles_to_tile_table(tiles: &[Tile]) -> TileTable {
    let mut tt = TileTable::default();
    for &t in tiles {
        inc_tile(&mut tt, t);
    }
    tt
}

// ドラ表示牌のリストを受け取ってドラ評価値のテーブルを返却
pub fn create_dora_table(doras: &[Tile]) -> TileTable {
    let mut dt = TileTable::default();
    for d in doras {
        let ni = if d.is_hornor() {
            match d.1 {
                WN => WE,
                DR => DW,
                i => i + 1,
            }
        } else {
            match d.1 {
                9 => 1,
                0 => 6,
                _ => d.1 + 1,
            }
        };
        dt[d.0][ni] += 1;
    }

    dt
}

// ドラ表示牌によるドラの数を勘定
pub fn count_dora(hand: &TileTable, melds: &[Meld], doras: &[Tile]) -> usize {
    let dt = create_dora_table(doras);
    let mut n_dora = 0;

    for ti in 0..TYPE {
        for ni in 1..TNUM {
            n_dora += dt[ti][ni] * hand[ti][ni];
        }
    }

    for m in melds {
        for t in &m.tiles {
            let t = t.to_normal();
            n_dora += dt[t.0][t.1];
        }
    }

    n_dora
}

// 手牌と副露に含まれる赤5の数を勘定
pub fn count_red5(hand: &TileTable, melds: &[Meld]) -> usize {
    let mut n_red = hand[TM][0] + hand[TP][0] + hand[TS][0];
    for m in melds {
        for t in &m.tiles {
            if t.is_red5() {
                n_red += 1;
            }
        }
    }
    n_red
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiletable_red5() {
        let mut tt = TileTable::default();
        inc_tile(&mut tt, Tile(TM, 0));
        inc_tile(&mut tt, Tile(TM, 5));
        assert_eq!(tt[TM][0], 1);
        assert_eq!(tt[TM][5], 2);

        let tiles = tiles_from_tile_table(&tt);
        assert_eq!(tiles, vec![Tile(TM, 0), Tile(TM, 5)]);
    }

    #[test]
    fn test_dora_table() {
        // 数牌は次の数字, 9は1に戻る, 赤5表示は6
        let dt = create_dora_table(&[Tile(TM, 9), Tile(TP, 0), Tile(TS, 1)]);
        assert_eq!(dt[TM][1], 1);
        assert_eq!(dt[TP][6], 1);
        assert_eq!(dt[TS][2], 1);

        // 風牌は東南西北の循環, 三元牌は白發中の循環
        let dt = create_dora_table(&[Tile(TZ, WN), Tile(TZ, DR), Tile(TZ, WE), Tile(TZ, DW)]);
        assert_eq!(dt[TZ][WE], 1);
        assert_eq!(dt[TZ][DW], 1);
        assert_eq!(dt[TZ][WS], 1);
        assert_eq!(dt[TZ][DG], 1);
    }

    #[test]
    fn test_count_dora() {
        let hand = tiles_to_tile_table(&[Tile(TM, 5), Tile(TM, 0), Tile(TS, 9)]);
        let melds = vec![Meld::new(vec![Tile(TP, 3); 3], true).unwrap()];

        // 表示牌4m -> ドラ5m (赤5も通常の5として数える)
        assert_eq!(count_dora(&hand, &melds, &[Tile(TM, 4)]), 2);
        // 表示牌2p -> ドラ3p (副露内)
        assert_eq!(count_dora(&hand, &melds, &[Tile(TP, 2)]), 3);
        // 表示牌8s -> ドラ9s
        assert_eq!(count_dora(&hand, &melds, &[Tile(TS, 8)]), 1);

        assert_eq!(count_red5(&hand, &melds), 1);
    }
}
