use crate::model::*;

// 手牌(和了牌を含む)の分解結果. 面子と雀頭を昇順に格納する.
pub type ParsedHand = Vec<Meld>;

#[inline]
fn new_set(type_: MeldType, t: Tile, len: usize) -> Meld {
    Meld {
        type_,
        tiles: vec![t; len],
        is_open: false,
    }
}

#[inline]
fn new_shuntsu(ti: Type, ni: Tnum) -> Meld {
    Meld {
        type_: MeldType::Shuntsu,
        tiles: vec![Tile(ti, ni), Tile(ti, ni + 1), Tile(ti, ni + 2)],
        is_open: false,
    }
}

// 4面子1雀頭形への分解をすべて列挙. handには和了牌を含めること.
// 赤5はindex5のカウントのみを参照するので分解結果の牌はすべて通常牌となる.
pub fn parse_into_normal_win(hand: &TileTable) -> Vec<ParsedHand> {
    let mut total = 0;
    let mut pair_type = None;
    for ti in 0..TYPE {
        let c: usize = hand[ti][1..].iter().sum();
        total += c;
        match c % 3 {
            0 => {}
            2 => {
                if pair_type.is_some() {
                    return vec![]; // 余りが2の牌種が複数
                }
                pair_type = Some(ti);
            }
            _ => return vec![], // 余りが1の牌種は分解不能
        }
    }
    if total % 3 != 2 {
        return vec![];
    }
    let pi = match pair_type {
        Some(pi) => pi,
        None => return vec![],
    };

    // 雀頭の候補ごとに残りを面子に分解
    let mut res = vec![];
    let mut tt = *hand;
    for ni in 1..TNUM {
        if tt[pi][ni] >= 2 {
            tt[pi][ni] -= 2;
            let pair = new_set(MeldType::Pair, Tile(pi, ni), 2);
            decompose_sets(&mut tt, TM, 1, &mut vec![], &pair, &mut res);
            tt[pi][ni] += 2;
        }
    }

    // 刻子と順子の取り出し順によって同一の分解が複数回現れる
    res.sort();
    res.dedup();
    res
}

// (ti, ni)以降の牌をすべて刻子と順子に分解する深さ優先探索
fn decompose_sets(
    tt: &mut TileTable,
    ti: Type,
    ni: Tnum,
    sets: &mut Vec<Meld>,
    pair: &Meld,
    res: &mut Vec<ParsedHand>,
) {
    if ti == TYPE {
        // すべての牌を使い切った
        let mut ph = sets.clone();
        ph.push(pair.clone());
        ph.sort();
        res.push(ph);
        return;
    }
    if ni == TNUM {
        decompose_sets(tt, ti + 1, 1, sets, pair, res);
        return;
    }
    if tt[ti][ni] == 0 {
        decompose_sets(tt, ti, ni + 1, sets, pair, res);
        return;
    }

    if tt[ti][ni] >= 3 {
        tt[ti][ni] -= 3;
        sets.push(new_set(MeldType::Koutsu, Tile(ti, ni), 3));
        decompose_sets(tt, ti, ni, sets, pair, res);
        sets.pop();
        tt[ti][ni] += 3;
    }

    if ti != TZ && ni + 2 < TNUM && tt[ti][ni + 1] > 0 && tt[ti][ni + 2] > 0 {
        tt[ti][ni] -= 1;
        tt[ti][ni + 1] -= 1;
        tt[ti][ni + 2] -= 1;
        sets.push(new_shuntsu(ti, ni));
        decompose_sets(tt, ti, ni, sets, pair, res);
        sets.pop();
        tt[ti][ni] += 1;
        tt[ti][ni + 1] += 1;
        tt[ti][ni + 2] += 1;
    }
}

// 七対子形への分解. 同一牌4枚は2対子として扱わない.
pub fn parse_into_chiitoitsu_win(hand: &TileTable) -> Vec<ParsedHand> {
    let mut ph = vec![];
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            match hand[ti][ni] {
                0 => {}
                2 => ph.push(new_set(MeldType::Pair, Tile(ti, ni), 2)),
                _ => return vec![],
            }
        }
    }
    if ph.len() != 7 {
        return vec![];
    }
    vec![ph]
}

// 国士無双形への分解. 么九牌13種がすべて揃っている場合のみ成立し,
// 12個のSingleと1個のPairの合計13要素を返却する.
pub fn parse_into_kokushimusou_win(hand: &TileTable) -> Vec<ParsedHand> {
    let mut ph = vec![];
    let mut n_pair = 0;
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            let c = hand[ti][ni];
            if !Tile(ti, ni).is_end() || (ti == TZ && ni > DR) {
                if c != 0 {
                    return vec![];
                }
                continue;
            }
            match c {
                1 => ph.push(new_set(MeldType::Single, Tile(ti, ni), 1)),
                2 => {
                    n_pair += 1;
                    ph.push(new_set(MeldType::Pair, Tile(ti, ni), 2));
                }
                _ => return vec![],
            }
        }
    }
    if n_pair != 1 {
        return vec![];
    }
    ph.sort();
    vec![ph]
}
