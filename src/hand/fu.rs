use crate::model::*;

use super::yaku::{is_pinfu_shape, YakuContext};

use MeldType::*;

fn new_fu(name: &str, fu: usize) -> Fu {
    Fu {
        name: name.to_string(),
        fu,
    }
}

impl YakuContext {
    // 符の内訳と合計(10符単位に切り上げ済み)を返却
    pub fn calc_fu(&self) -> (usize, Vec<Fu>) {
        // 国士無双は符を持たない
        if self.parsed_hand.len() == 13 {
            return (0, vec![]);
        }
        // 七対子は一律25符
        if self.parsed_hand.len() == 7 {
            return (25, vec![new_fu("七対子", 25)]);
        }
        // 平和ツモは20符 (ツモ符は付かない)
        if !self.is_open && self.is_self_drawn && is_pinfu_shape(self) {
            return (20, vec![new_fu("平和ツモ", 20)]);
        }

        let mut fus = vec![new_fu("副底", 20)];

        // 和了り方
        if self.is_self_drawn {
            fus.push(new_fu("ツモ符", 2));
        } else if !self.is_open {
            fus.push(new_fu("門前加符", 10));
        }

        // 面子
        for m in &self.parsed_hand {
            // ロン和了で完成した刻子は明刻扱い
            let open = m.is_open
                || (m.type_ == Koutsu && !self.is_self_drawn && m.contains(self.winning_tile));
            let end = m.is_all_end();
            let (name, fu) = match m.type_ {
                Koutsu if open => ("明刻", if end { 4 } else { 2 }),
                Koutsu => ("暗刻", if end { 8 } else { 4 }),
                Kantsu if open => ("明槓", if end { 16 } else { 8 }),
                Kantsu => ("暗槓", if end { 32 } else { 16 }),
                _ => continue,
            };
            fus.push(new_fu(&format!("{}({})", name, m), fu));
        }

        // 雀頭
        let pt = self.pair_tile;
        if pt.is_doragon() {
            fus.push(new_fu("役牌の雀頭", 2));
        } else if pt.is_wind() {
            if pt.1 == self.prevalent_wind && pt.1 == self.seat_wind {
                fus.push(new_fu("連風牌の雀頭", self.rule.double_wind_fu));
            } else if pt.1 == self.prevalent_wind {
                fus.push(new_fu("場風の雀頭", 2));
            } else if pt.1 == self.seat_wind {
                fus.push(new_fu("自風の雀頭", 2));
            }
        }

        // 待ちの形 (両面とシャンポンは0符, それ以外は2符)
        // 平和形の場合は単騎などに取れても両面待ちを優先
        let wt = self.winning_tile.to_normal();
        if !is_pinfu_shape(self) {
            if pt == wt {
                fus.push(new_fu("単騎待ち", 2));
            } else {
                for m in &self.parsed_hand {
                    if m.type_ != Shuntsu || m.is_open || m.tiles[0].0 != wt.0 {
                        continue;
                    }
                    if m.tiles[1].1 == wt.1 {
                        fus.push(new_fu("嵌張待ち", 2));
                        break;
                    }
                    if (m.tiles[2].1 == wt.1 && m.tiles[0].1 == 1)
                        || (m.tiles[0].1 == wt.1 && m.tiles[2].1 == 9)
                    {
                        fus.push(new_fu("辺張待ち", 2));
                        break;
                    }
                }
            }
        }

        let total: usize = fus.iter().map(|f| f.fu).sum();

        // 喰い平和形のロンは30符
        if total == 20 {
            fus.push(new_fu("喰い平和", 10));
            return (30, fus);
        }

        let rounded = (total + 9) / 10 * 10;
        if rounded != total {
            fus.push(new_fu("切り上げ", rounded - total));
        }

        (rounded, fus)
    }
}
