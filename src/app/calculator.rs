use std::fmt::Write;
use std::fs::File;
use std::io::{self, BufRead};

use crate::control::common::*;
use crate::control::string::*;
use crate::hand::{evaluate_hand, YakuFlags};
use crate::model::*;
use crate::util::misc::*;

use crate::error;

// 式の形式: 手牌[,副露…]/場況/条件役/検証値
//   手牌:   "123m406p789s11z" 最後の牌が和了牌. 末尾の'+'はロン和了
//   副露:   "666zo"のような形式. 'o'なしの槓子は暗槓
//   場況:   場風と自風("ES"など) + ドラ表示牌 + 裏ドラ表示牌
//   条件役: "立直"のようなカンマ区切りの役名
//   検証値: "符,飜,得点"
#[derive(Debug)]
pub struct CalculatorApp {
    args: Vec<String>,
    detail: bool,
}

impl CalculatorApp {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            detail: false,
        }
    }

    pub fn run(&mut self) {
        let mut file_path = "".to_string();
        let mut exp = "".to_string();
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-d" => self.detail = true,
                "-f" => file_path = next_value(&mut it, s),
                arg => {
                    if arg.starts_with('-') {
                        error!("unknown option: {}", arg);
                        return;
                    }
                    if !exp.is_empty() {
                        error!("multiple expression is not allowed");
                        return;
                    }
                    exp = s.clone();
                }
            }
        }

        if (file_path.is_empty() && exp.is_empty()) || (!file_path.is_empty() && !exp.is_empty()) {
            print_usage();
            return;
        }

        if !exp.is_empty() {
            if let Err(e) = self.process_expression(&exp) {
                error!("{}", e);
                return;
            }
        }

        if !file_path.is_empty() {
            if let Err(e) = self.run_from_file(&file_path) {
                error!("{}", e);
            }
        }
    }

    fn run_from_file(&self, file_path: &str) -> Res {
        let file = File::open(file_path)?;
        let lines = io::BufReader::new(file).lines();
        for exp in lines.map_while(Result::ok) {
            let e = exp.replace(' ', "");
            if e.is_empty() || e.starts_with('#') {
                // 空行とコメント行はスキップ
                println!("> {}", exp);
            } else if let Err(e) = self.process_expression(&exp) {
                error!("{}", e);
            }
            println!();
        }
        Ok(())
    }

    fn process_expression(&self, exp: &str) -> Res {
        let mut calculator = Calculator::new(self.detail);
        calculator.parse(exp)?;
        calculator.run();
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
enum Verify {
    Ok,
    Error,
    Skip,
}

#[derive(Debug)]
struct Calculator {
    detail: bool,
    // evaluate_hand params
    hand: TileTable,
    melds: Vec<Meld>,
    doras: Vec<Tile>,
    ura_doras: Vec<Tile>,
    winning_tile: Tile,
    is_drawn: bool,
    yaku_flags: YakuFlags,
    round: RoundConfig,
    rule: RuleConfig,
    // score verify
    verify: bool,
    fu: usize,
    fan: usize,
    score: Score,
}

impl Calculator {
    fn new(detail: bool) -> Self {
        Self {
            detail,
            hand: TileTable::default(),
            melds: vec![],
            doras: vec![],
            ura_doras: vec![],
            winning_tile: Z8,
            is_drawn: true,
            yaku_flags: YakuFlags::default(),
            round: RoundConfig::default(),
            rule: RuleConfig::default(),
            verify: false,
            fu: 0,
            fan: 0,
            score: 0,
        }
    }

    fn parse(&mut self, input: &str) -> Res {
        println!("> {}", input);

        let input = input.replace(' ', "");
        let input = input.split('#').collect::<Vec<&str>>()[0]; // コメント削除
        let exps: Vec<&str> = input.split('/').collect();
        let len = exps.len();
        if len > 0 {
            self.parse_hand_meld(exps[0])?;
        }
        if len > 1 {
            self.parse_stage_info(exps[1])?;
        }
        if len > 2 {
            self.parse_yaku_flags(exps[2])?;
        }
        if len > 3 {
            self.parse_score_verify(exps[3])?;
        }

        if self.detail {
            println!(
                "hand: {}, melds: {}",
                tiles_to_string(&tiles_from_tile_table(&self.hand)),
                vec_to_string(&self.melds)
            );
        }

        Ok(())
    }

    fn run(&self) -> Verify {
        let ctx = evaluate_hand(
            &self.hand,
            &self.melds,
            &self.doras,
            &self.ura_doras,
            self.winning_tile,
            self.is_drawn,
            self.yaku_flags,
            &self.round,
            &self.rule,
        );

        let verify = match ctx {
            Some(ctx) => {
                if self.detail {
                    match serde_json::to_string_pretty(&ctx) {
                        Ok(s) => println!("{}", s),
                        Err(e) => error!("{}", e),
                    }
                }

                let mut yakus = "".to_string();
                for y in &ctx.yakus {
                    let _ = write!(yakus, "{}({}), ", y.name, y.fan);
                }
                println!("yakus: {}", yakus);

                println!(
                    "fu: {}, fan: {}, yakuman: {}, score: {}, {}",
                    ctx.fu, ctx.fan, ctx.yakuman, ctx.score, ctx.title
                );

                if !self.verify {
                    Verify::Skip
                } else if ctx.yakuman > 0 {
                    // 役満以上は得点のみをチェック
                    if ctx.score == self.score {
                        Verify::Ok
                    } else {
                        Verify::Error
                    }
                } else {
                    if ctx.fu == self.fu && ctx.fan == self.fan && ctx.score == self.score {
                        Verify::Ok
                    } else {
                        Verify::Error
                    }
                }
            }
            None => {
                println!("not win hand");
                if !self.verify {
                    Verify::Skip
                } else if self.score == 0 {
                    Verify::Ok
                } else {
                    Verify::Error
                }
            }
        };
        println!("verify: {:?}", verify);
        verify
    }

    fn parse_hand_meld(&mut self, input: &str) -> Res {
        let mut exp_hand = "".to_string();
        let mut exp_melds = vec![];
        for exp in input.split(',') {
            if exp_hand.is_empty() {
                if exp.ends_with('+') {
                    self.is_drawn = false;
                }
                exp_hand = exp.replace('+', "");
            } else {
                exp_melds.push(exp.to_string());
            }
        }

        // parse hands
        for t in tiles_from_string(&exp_hand)? {
            inc_tile(&mut self.hand, t);
            self.winning_tile = t; // 最後の牌が和了牌
        }

        // parse melds
        for exp_meld in &exp_melds {
            self.melds.push(meld_from_string(exp_meld)?);
        }

        self.check_tile_counts()
    }

    // 手牌と副露を合わせて同一牌が5枚以上使われていないかチェック
    fn check_tile_counts(&self) -> Res {
        let mut tt = self.hand;
        for m in &self.melds {
            for &t in &m.tiles {
                inc_tile(&mut tt, t);
            }
        }
        for ti in 0..TYPE {
            for ni in 1..TNUM {
                if tt[ti][ni] > TILE {
                    Err(format!("too many tiles: {}", Tile(ti, ni)))?;
                }
            }
        }
        Ok(())
    }

    fn parse_stage_info(&mut self, input: &str) -> Res {
        let exps: Vec<&str> = input.split(',').collect();
        let len = exps.len();
        if len > 0 && !exps[0].is_empty() {
            let chars: Vec<char> = exps[0].chars().collect();
            if chars.len() != 2 {
                Err(format!("stage info len is not 2: {}", exps[0]))?;
            }
            self.round.prevalent_wind = wind_from_char(chars[0])?;
            self.round.seat_wind = wind_from_char(chars[1])?;
        }
        if len > 1 {
            self.doras = tiles_from_string(exps[1])?;
        }
        if len > 2 {
            self.ura_doras = tiles_from_string(exps[2])?;
        }
        Ok(())
    }

    fn parse_yaku_flags(&mut self, input: &str) -> Res {
        for y in input.split(',') {
            match y {
                "立直" => self.yaku_flags.riichi = true,
                "両立直" => self.yaku_flags.dabururiichi = true,
                "一発" => self.yaku_flags.ippatsu = true,
                "海底摸月" => self.yaku_flags.haiteiraoyue = true,
                "河底撈魚" => self.yaku_flags.houteiraoyui = true,
                "嶺上開花" => self.yaku_flags.rinshankaihou = true,
                "槍槓" => self.yaku_flags.chankan = true,
                "天和" => self.yaku_flags.tenhou = true,
                "地和" => self.yaku_flags.tiihou = true,
                "" => {}
                _ => Err(format!("invalid conditional yaku: {}", y))?,
            }
        }
        Ok(())
    }

    fn parse_score_verify(&mut self, input: &str) -> Res {
        let exps: Vec<&str> = input.split(',').collect();
        if exps.len() != 3 {
            Err(format!("invalid score verify info: {}", input))?;
        }
        self.fu = exps[0].parse::<usize>()?;
        self.fan = exps[1].parse::<usize>()?;
        self.score = exps[2].parse::<Score>()?;
        self.verify = true;
        Ok(())
    }
}

fn print_usage() {
    error!(
        r"invalid input
Usage
    $ cargo run C EXPRESSION [-d]
    $ cargo run C -f FILE [-d]
Options
    -d: print debug info
    -f: read expressions from file instead of a commandline expression
"
    );
}

#[test]
fn test_calculator() {
    let file = File::open("tests/win_hands.txt").unwrap();
    let lines = io::BufReader::new(file).lines();
    for exp in lines.map_while(Result::ok) {
        let e = exp.replace(' ', "");
        if e.is_empty() || e.starts_with('#') {
            // 空行とコメント行はスキップ
            println!("> {}", exp);
        } else {
            let mut calculator = Calculator::new(false);
            calculator.parse(&e).unwrap();
            assert_ne!(Verify::Error, calculator.run());
        }
    }
}
