use crate::model::*;
use crate::util::misc::Res;

pub fn tile_type_from_char(ch: char) -> Res<Type> {
    match ch {
        'm' => Ok(TM),
        'p' => Ok(TP),
        's' => Ok(TS),
        'z' => Ok(TZ),
        _ => Err(format!("invalid tile type char: {ch}"))?,
    }
}

pub fn tile_type_to_char(ti: Type) -> char {
    match ti {
        TM => 'm',
        TP => 'p',
        TS => 's',
        TZ => 'z',
        _ => panic!("invalid tile type index: {ti}"),
    }
}

pub fn tile_number_from_char(ch: char) -> Res<Tnum> {
    if let Some(i) = ch.to_digit(10) {
        Ok(i as Tnum)
    } else {
        Err(format!("invalid tile number char: {ch}"))?
    }
}

pub fn tile_number_to_char(ni: Tnum) -> char {
    std::char::from_digit(ni as u32, 10)
        .unwrap_or_else(|| panic!("invalid tile number index: {}", ni))
}

pub fn wind_from_char(ch: char) -> Res<Tnum> {
    Ok(match ch {
        'E' => WE,
        'S' => WS,
        'W' => WW,
        'N' => WN,
        _ => Err(format!("invalid wind char: {}", ch))?,
    })
}

// "123m406p77z"のような牌種を後置する形式の文字列を牌のリストに変換
pub fn tiles_from_string(exp: &str) -> Res<Vec<Tile>> {
    let mut tiles = vec![];
    let mut nis = vec![];
    for ch in exp.chars() {
        match ch {
            'm' | 'p' | 's' | 'z' => {
                let ti = tile_type_from_char(ch)?;
                if nis.is_empty() {
                    Err(format!("tile number missing before '{ch}'"))?;
                }
                for &ni in &nis {
                    if ti == TZ && !(WE..=DR).contains(&ni) {
                        Err(format!("invalid hornor tile: {ni}z"))?;
                    }
                    tiles.push(Tile(ti, ni));
                }
                nis.clear();
            }
            '0'..='9' => nis.push(ch.to_digit(10).unwrap() as Tnum),
            _ => {
                Err(format!("invalid char: '{ch}'"))?;
            }
        }
    }
    if !nis.is_empty() {
        Err("tile type missing after number")?;
    }
    Ok(tiles)
}

pub fn tiles_to_string(tiles: &[Tile]) -> String {
    let mut res = String::new();
    let mut last_ti = 255;
    for t in tiles {
        if t.0 != last_ti {
            if last_ti != 255 {
                res.push(tile_type_to_char(last_ti));
            }
            last_ti = t.0;
        }
        res.push(tile_number_to_char(t.1));
    }
    if last_ti != 255 {
        res.push(tile_type_to_char(last_ti));
    }
    res
}

// "456so"のような文字列を副露に変換. 末尾の'o'が鳴いた面子を表し,
// 'o'なしの槓子は暗槓として扱う.
pub fn meld_from_string(exp: &str) -> Res<Meld> {
    let (exp2, is_open) = match exp.strip_suffix('o') {
        Some(stripped) => (stripped, true),
        None => (exp, false),
    };
    let tiles = tiles_from_string(exp2)?;
    let m = Meld::new(tiles, is_open)?;
    match m.type_ {
        MeldType::Shuntsu | MeldType::Koutsu if m.is_open => {}
        MeldType::Kantsu => {}
        _ => Err(format!("invalid meld: {exp}"))?,
    }
    Ok(m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiles_from_string() {
        let tiles = tiles_from_string("123m40p7z").unwrap();
        assert_eq!(
            tiles,
            vec![
                Tile(TM, 1),
                Tile(TM, 2),
                Tile(TM, 3),
                Tile(TP, 4),
                Tile(TP, 0),
                Tile(TZ, DR),
            ]
        );

        assert!(tiles_from_string("8z").is_err());
        assert!(tiles_from_string("0z").is_err());
        assert!(tiles_from_string("123").is_err());
        assert!(tiles_from_string("m123").is_err());
        assert!(tiles_from_string("1x").is_err());
        assert_eq!(tiles_from_string("").unwrap(), vec![]);
    }

    #[test]
    fn test_tiles_to_string() {
        let mut tiles = tiles_from_string("406p123m77z").unwrap();
        tiles.sort();
        assert_eq!(tiles_to_string(&tiles), "123m406p77z");
        assert_eq!(tiles_to_string(&[]), "");
    }

    #[test]
    fn test_meld_from_string() {
        let m = meld_from_string("456so").unwrap();
        assert_eq!(m.type_, MeldType::Shuntsu);
        assert!(m.is_open);

        let m = meld_from_string("666zo").unwrap();
        assert_eq!(m.type_, MeldType::Koutsu);
        assert_eq!(m.to_string(), "666zo");

        // 'o'なしの槓子は暗槓
        let m = meld_from_string("9999p").unwrap();
        assert_eq!(m.type_, MeldType::Kantsu);
        assert!(!m.is_open);

        let m = meld_from_string("0555so").unwrap();
        assert_eq!(m.type_, MeldType::Kantsu);
        assert!(m.is_open);

        // 順子や刻子は鳴いていなければ手牌の一部なので不正
        assert!(meld_from_string("456s").is_err());
        assert!(meld_from_string("666z").is_err());
        assert!(meld_from_string("45so").is_err());
        assert!(meld_from_string("456mo+").is_err());
    }
}
