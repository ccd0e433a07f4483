use crate::model::*;

fn ceil(n: Point) -> Point {
    (n + 99) / 100 * 100
}

fn calc_base_point(fu: usize, fan: usize, yakuman: usize, rule: &RuleConfig) -> Point {
    (if yakuman == 0 {
        match fan {
            // 符による計算は4翻以下のみ
            ..5 => {
                let base = fu * 2_usize.pow(fan as u32 + 2);
                // 切り上げ満貫では30符4翻と60符3翻(1920点)も満貫に含める
                let mangan = if rule.round_up_mangan { 1920 } else { 2000 };
                if base >= mangan {
                    2000 // 満貫
                } else {
                    base
                }
            }
            5 => 2000,      // 満貫
            6..8 => 3000,   // 跳満
            8..11 => 4000,  // 倍満
            11..13 => 6000, // 三倍満
            13.. => {
                if rule.accumulated_yakuman {
                    8000 // 数え役満
                } else {
                    6000
                }
            }
        }
    } else {
        8000 * yakuman
    }) as Point
}

fn get_score_title(base_point: Point, yakuman: usize) -> String {
    match yakuman {
        0 => match base_point {
            2000 => "満貫",
            3000 => "跳満",
            4000 => "倍満",
            6000 => "三倍満",
            8000 => "数え役満",
            _ => "",
        },
        1 => "役満",
        2 => "二倍役満",
        3 => "三倍役満",
        4 => "四倍役満",
        5 => "五倍役満",
        6 => "六倍役満",
        _ => "N倍役満",
    }
    .to_string()
}

// (基本点, 支払いの形, 得点タイトル)を返却. 各支払いは100点単位に切り上げ.
pub fn calc_points(
    round: &RoundConfig,
    rule: &RuleConfig,
    fu: usize,
    fan: usize,
    yakuman: usize,
    is_self_drawn: bool,
) -> (Point, Payment, String) {
    let base = calc_base_point(fu, fan, yakuman, rule);
    let title = get_score_title(base, yakuman);
    let payment = if round.is_dealer() {
        if is_self_drawn {
            Payment::DealerTsumo(ceil(base * 2))
        } else {
            Payment::Ron(ceil(base * 6))
        }
    } else if is_self_drawn {
        Payment::Tsumo(ceil(base), ceil(base * 2))
    } else {
        Payment::Ron(ceil(base * 4))
    };

    (base, payment, title)
}
