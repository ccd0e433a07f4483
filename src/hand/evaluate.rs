use super::parse::*;
use super::point::calc_points;
use super::yaku::{YakuContext, YakuFlags};
use crate::control::common::{count_dora, count_red5};
use crate::model::*;

// 和了形である場合, 最も得点の高い解釈のSome(ScoreContext)を返却.
// 和了形でない場合と無役の場合はNoneを返却.
pub fn evaluate_hand(
    hand: &TileTable,      // 手牌 (副露以外, ロンの場合でも和了牌を含む)
    melds: &[Meld],        // 副露と暗槓
    doras: &[Tile],        // ドラ表示牌 (注:ドラそのものではない)
    ura_doras: &[Tile],    // 裏ドラ表示牌 リーチしていない場合は空
    winning_tile: Tile,    // 和了牌
    is_self_drawn: bool,   // ツモ和了
    yaku_flags: YakuFlags, // 特殊条件役のフラグ
    round: &RoundConfig,
    rule: &RuleConfig,
) -> Option<ScoreContext> {
    let mut phs = parse_into_normal_win(hand);
    if melds.is_empty() {
        // 七対子と国士無双は門前のみ
        phs.append(&mut parse_into_chiitoitsu_win(hand));
        phs.append(&mut parse_into_kokushimusou_win(hand));
    }

    let mut wins = vec![];
    for mut ph in phs {
        ph.extend(melds.iter().cloned());
        ph.sort();
        match ph.len() {
            5 | 7 | 13 => {} // 通常, 七対子, 国士
            _ => continue,   // 面子数の不整合
        }
        wins.push(YakuContext::new(
            *hand,
            ph,
            winning_tile,
            round.prevalent_wind,
            round.seat_wind,
            is_self_drawn,
            yaku_flags,
            rule,
        ));
    }

    if wins.is_empty() {
        return None; // 和了形以外
    }

    let is_open = melds.iter().any(|m| m.is_open);
    let n_dora = count_dora(hand, melds, doras);
    let n_red_dora = count_red5(hand, melds);
    let n_ura_dora = if yaku_flags.riichi || yaku_flags.dabururiichi {
        count_dora(hand, melds, ura_doras)
    } else {
        0
    };

    let mut results = vec![];
    for ctx in wins {
        let (yaku_list, is_yakuman, count) = ctx.calc_yaku();
        if yaku_list.is_empty() || (!is_yakuman && count == 0) {
            continue; // 無役
        }

        let mut yakus: Vec<Yaku> = yaku_list
            .iter()
            .map(|y| {
                let fan = if is_yakuman {
                    match y.fan_close {
                        13 => 1,
                        _ => rule.double_yakuman,
                    }
                } else if is_open {
                    y.fan_open
                } else {
                    y.fan_close
                };
                Yaku {
                    name: y.name.to_string(),
                    fan,
                }
            })
            .collect();

        let (fu, fus) = if is_yakuman {
            (0, vec![]) // 役満は符を参照しない
        } else {
            ctx.calc_fu()
        };
        let (mut fan, yakuman) = if is_yakuman { (0, count) } else { (count, 0) };
        if yakuman == 0 {
            // 役満はドラを数えない
            yakus.retain(|y| y.fan > 0);
            fan += n_dora + n_red_dora + n_ura_dora;
            if n_dora != 0 {
                yakus.push(Yaku {
                    name: "ドラ".to_string(),
                    fan: n_dora,
                });
            }
            if n_red_dora != 0 {
                yakus.push(Yaku {
                    name: "赤ドラ".to_string(),
                    fan: n_red_dora,
                });
            }
            if n_ura_dora != 0 {
                yakus.push(Yaku {
                    name: "裏ドラ".to_string(),
                    fan: n_ura_dora,
                });
            }
        }

        let (base_points, payment, title) =
            calc_points(round, rule, fu, fan, yakuman, is_self_drawn);
        results.push(ScoreContext {
            yakus,
            fus,
            fu,
            fan,
            yakuman,
            base_points,
            score: payment.base_gain(),
            total: payment.total_gain(round),
            payment,
            title,
        });
    }

    // 複数の解釈が可能な場合は最も得点の高いものを採用
    results.sort_by_key(|r| (r.base_points, r.yakuman, r.fan, r.fu));
    results.pop()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::common::tiles_to_tile_table;
    use crate::control::string::{meld_from_string, tiles_from_string};

    // 手牌文字列の最後の牌を和了牌とする
    fn eval(
        hand: &str,
        melds: &[&str],
        doras: &str,
        ura_doras: &str,
        is_self_drawn: bool,
        yaku_flags: YakuFlags,
        round: &RoundConfig,
        rule: &RuleConfig,
    ) -> Option<ScoreContext> {
        let tiles = tiles_from_string(hand).unwrap();
        let winning_tile = *tiles.last().unwrap();
        let tt = tiles_to_tile_table(&tiles);
        let melds: Vec<Meld> = melds
            .iter()
            .map(|s| meld_from_string(s).unwrap())
            .collect();
        let doras = if doras.is_empty() {
            vec![]
        } else {
            tiles_from_string(doras).unwrap()
        };
        let ura_doras = if ura_doras.is_empty() {
            vec![]
        } else {
            tiles_from_string(ura_doras).unwrap()
        };

        evaluate_hand(
            &tt,
            &melds,
            &doras,
            &ura_doras,
            winning_tile,
            is_self_drawn,
            yaku_flags,
            round,
            rule,
        )
    }

    fn yaku_names(sc: &ScoreContext) -> Vec<&str> {
        sc.yakus.iter().map(|y| y.name.as_str()).collect()
    }

    #[test]
    fn test_riichi_tanyao_ron() {
        // リーチ + 断么九: 親のロンで40符2翻
        let flags = YakuFlags {
            riichi: true,
            ..Default::default()
        };
        let sc = eval(
            "33345m23455p678s5p",
            &[],
            "",
            "",
            false,
            flags,
            &RoundConfig::default(),
            &RuleConfig::default(),
        )
        .unwrap();
        assert_eq!(sc.fan, 2);
        assert_eq!(sc.fu, 40);
        assert_eq!(sc.score, 3900);
        assert_eq!(sc.payment, Payment::Ron(3900));
        assert!(yaku_names(&sc).contains(&"リーチ"));
        assert!(yaku_names(&sc).contains(&"断么九"));
    }

    #[test]
    fn test_chiitoitsu_ron() {
        let round = RoundConfig {
            seat_wind: WN,
            ..RoundConfig::default()
        };
        let sc = eval(
            "112244m5566p778s8s",
            &[],
            "",
            "",
            false,
            YakuFlags::default(),
            &round,
            &RuleConfig::default(),
        )
        .unwrap();
        assert_eq!(sc.fan, 2);
        assert_eq!(sc.fu, 25);
        assert_eq!(sc.score, 1600);
    }

    #[test]
    fn test_ikkitsuukan_ron() {
        let round = RoundConfig {
            seat_wind: WN,
            ..RoundConfig::default()
        };
        let sc = eval(
            "123456789m1234p1p",
            &[],
            "",
            "",
            false,
            YakuFlags::default(),
            &round,
            &RuleConfig::default(),
        )
        .unwrap();
        assert_eq!(sc.fan, 2);
        assert_eq!(sc.fu, 40);
        assert_eq!(sc.score, 2600);
        assert!(yaku_names(&sc).contains(&"一気通貫"));
    }

    #[test]
    fn test_stacked_yakuman_tsumo() {
        // 天和 + 大四喜 + 字一色 + 四暗刻単騎 = 六倍役満
        let flags = YakuFlags {
            tenhou: true,
            ..Default::default()
        };
        let sc = eval(
            "1112223334445z5z",
            &[],
            "",
            "",
            true,
            flags,
            &RoundConfig::default(),
            &RuleConfig::default(),
        )
        .unwrap();
        assert_eq!(sc.yakuman, 6);
        assert_eq!(sc.fan, 0);
        assert_eq!(sc.fu, 0);
        assert_eq!(sc.score, 288000);
        assert_eq!(sc.payment, Payment::DealerTsumo(96000));
        assert_eq!(sc.title, "六倍役満");
        let names = yaku_names(&sc);
        assert!(names.contains(&"天和"));
        assert!(names.contains(&"大四喜"));
        assert!(names.contains(&"字一色"));
        assert!(names.contains(&"四暗刻単騎"));
    }

    #[test]
    fn test_daisangen_with_kans() {
        // 大三元: 役満はドラも三槓子も数えない
        let sc = eval(
            "05999s",
            &["5555zo", "6666zo", "7777zo"],
            "5p4m8m0m",
            "",
            false,
            YakuFlags::default(),
            &RoundConfig::default(),
            &RuleConfig::default(),
        )
        .unwrap();
        assert_eq!(sc.yakuman, 1);
        assert_eq!(sc.score, 48000);
        assert_eq!(sc.title, "役満");
        assert_eq!(yaku_names(&sc), vec!["大三元"]);
    }

    #[test]
    fn test_yakuman_rule_toggles() {
        // 字一色 + 四暗刻単騎 = 三倍役満
        let round = RoundConfig {
            seat_wind: WS,
            ..RoundConfig::default()
        };
        let sc = eval(
            "111333555666z7z7z",
            &[],
            "",
            "",
            false,
            YakuFlags::default(),
            &round,
            &RuleConfig::default(),
        )
        .unwrap();
        assert_eq!(sc.yakuman, 3);
        assert_eq!(sc.score, 96000);
        assert_eq!(sc.title, "三倍役満");
        let names = yaku_names(&sc);
        assert!(names.contains(&"字一色"));
        assert!(names.contains(&"四暗刻単騎"));

        // ダブル役満を通常の役満として数える設定
        let rule = RuleConfig {
            double_yakuman: 1,
            ..RuleConfig::default()
        };
        let sc = eval(
            "111333555666z7z7z",
            &[],
            "",
            "",
            false,
            YakuFlags::default(),
            &round,
            &rule,
        )
        .unwrap();
        assert_eq!(sc.yakuman, 2);
        assert_eq!(sc.score, 64000);

        // 役満の複合を認めない設定では常に1倍
        let rule = RuleConfig {
            multiple_yakuman: false,
            ..RuleConfig::default()
        };
        let sc = eval(
            "111333555666z7z7z",
            &[],
            "",
            "",
            false,
            YakuFlags::default(),
            &round,
            &rule,
        )
        .unwrap();
        assert_eq!(sc.yakuman, 1);
        assert_eq!(sc.score, 32000);
        assert_eq!(sc.title, "役満");
    }

    #[test]
    fn test_dora() {
        // 表示牌4p -> ドラ5p x3で満貫
        let flags = YakuFlags {
            riichi: true,
            ..Default::default()
        };
        let sc = eval(
            "33345m23455p678s5p",
            &[],
            "4p",
            "",
            false,
            flags,
            &RoundConfig::default(),
            &RuleConfig::default(),
        )
        .unwrap();
        assert_eq!(sc.fan, 5);
        assert_eq!(sc.score, 12000);
        assert_eq!(sc.title, "満貫");
        assert!(sc.yakus.contains(&Yaku {
            name: "ドラ".to_string(),
            fan: 3
        }));

        // 裏ドラはリーチ時のみ有効
        let sc = eval(
            "33345m23455p678s5p",
            &[],
            "",
            "4p",
            false,
            YakuFlags::default(),
            &RoundConfig::default(),
            &RuleConfig::default(),
        )
        .unwrap();
        assert_eq!(sc.fan, 1); // 断么九のみ
        assert!(!sc.yakus.iter().any(|y| y.name == "裏ドラ"));

        let sc = eval(
            "33345m23455p678s5p",
            &[],
            "",
            "4p",
            false,
            flags,
            &RoundConfig::default(),
            &RuleConfig::default(),
        )
        .unwrap();
        assert!(sc.yakus.contains(&Yaku {
            name: "裏ドラ".to_string(),
            fan: 3
        }));
    }

    #[test]
    fn test_red5_dora() {
        let flags = YakuFlags {
            riichi: true,
            ..Default::default()
        };
        let sc = eval(
            "344056m789p2245s3s",
            &[],
            "",
            "",
            true,
            flags,
            &RoundConfig {
                seat_wind: WS,
                ..RoundConfig::default()
            },
            &RuleConfig::default(),
        )
        .unwrap();
        // リーチ + 門前自摸 + 平和 + 赤ドラ
        assert_eq!(sc.fan, 4);
        assert_eq!(sc.fu, 20);
        assert_eq!(sc.score, 5200);
        assert!(sc.yakus.contains(&Yaku {
            name: "赤ドラ".to_string(),
            fan: 1
        }));
    }

    #[test]
    fn test_no_yaku() {
        // 鳴きのみで役がない場合はNone
        let sc = eval(
            "234m567p22s678s",
            &["111mo"],
            "",
            "",
            false,
            YakuFlags::default(),
            &RoundConfig::default(),
            &RuleConfig::default(),
        );
        assert!(sc.is_none());
    }

    #[test]
    fn test_not_winning_shape() {
        let sc = eval(
            "129m19p19s1234567z",
            &[],
            "",
            "",
            false,
            YakuFlags::default(),
            &RoundConfig::default(),
            &RuleConfig::default(),
        );
        assert!(sc.is_none());

        // 対子だらけでも副露があれば七対子にならない
        let sc = eval(
            "1122m5566p77s8s",
            &["888so"],
            "",
            "",
            false,
            YakuFlags::default(),
            &RoundConfig::default(),
            &RuleConfig::default(),
        );
        assert!(sc.is_none());
    }

    #[test]
    fn test_honba_and_sticks() {
        let flags = YakuFlags {
            riichi: true,
            ..Default::default()
        };
        let round = RoundConfig {
            honba: 1,
            riichi_sticks: 1,
            ..RoundConfig::default()
        };
        let sc = eval(
            "33345m23455p678s5p",
            &[],
            "",
            "",
            false,
            flags,
            &round,
            &RuleConfig::default(),
        )
        .unwrap();
        assert_eq!(sc.score, 3900);
        assert_eq!(sc.total, 5200); // 3900 + 300 + 1000
    }

    #[test]
    fn test_best_interpretation() {
        // 七対子(9翻)と二盃口(11翻)の両方に解釈できる場合は高い方を採用
        let sc = eval(
            "11223344556677m",
            &[],
            "",
            "",
            true,
            YakuFlags::default(),
            &RoundConfig {
                seat_wind: WS,
                ..RoundConfig::default()
            },
            &RuleConfig::default(),
        )
        .unwrap();
        let names = yaku_names(&sc);
        assert!(names.contains(&"清一色"));
        assert!(names.contains(&"二盃口"));
        assert!(names.contains(&"平和"));
        assert!(!names.contains(&"七対子"));
        assert_eq!(sc.fan, 11); // 清6 + 二盃口3 + 平和1 + 門前自摸1
        assert_eq!(sc.title, "三倍満");
        assert_eq!(sc.score, 24000);
    }
}
