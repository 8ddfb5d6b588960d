//! Stat lookups over Yahoo stat lists and a parsed NBA stat line.

use super::types::Stat;
use crate::error::{Result, YahooError};


/// Yahoo NBA stat ids.
pub mod stat_ids {
    pub const GAMES_PLAYED: u32 = 0;
    pub const GAMES_STARTED: u32 = 1;
    pub const MINUTES_PLAYED: u32 = 2;
    pub const FGA: u32 = 3;
    pub const FGM: u32 = 4;
    pub const FG_PCT: u32 = 5;
    pub const FTA: u32 = 6;
    pub const FTM: u32 = 7;
    pub const FT_PCT: u32 = 8;
    pub const THREE_PA: u32 = 9;
    pub const THREE_PM: u32 = 10;
    pub const THREE_PCT: u32 = 11;
    pub const POINTS: u32 = 12;
    pub const OFFENSIVE_REBOUNDS: u32 = 13;
    pub const DEFENSIVE_REBOUNDS: u32 = 14;
    pub const REBOUNDS: u32 = 15;
    pub const ASSISTS: u32 = 16;
    pub const STEALS: u32 = 17;
    pub const BLOCKS: u32 = 18;
    pub const TURNOVERS: u32 = 19;
    pub const ASSIST_TURNOVER_RATIO: u32 = 20;
    pub const PERSONAL_FOULS: u32 = 21;
}

use stat_ids::*;

/// Made/attempted totals for the three shooting categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShootingStats {
    pub fgm: u32,
    pub fga: u32,
    pub ftm: u32,
    pub fta: u32,
    pub tpm: u32,
    pub tpa: u32,
}

/// Read-only view over a stat list.
pub struct StatHelper<'a> {
    stats: &'a [Stat],
}

impl<'a> StatHelper<'a> {
    pub fn new(stats: &'a [Stat]) -> Self {
        Self { stats }
    }

    pub fn all(&self) -> &'a [Stat] {
        self.stats
    }

    pub fn get_by_id(&self, stat_id: u32) -> Option<&'a str> {
        self.stats
            .iter()
            .find(|s| s.stat_id == stat_id)
            .map(|s| s.value.as_str())
    }

    fn parse_by_id<T: std::str::FromStr>(&self, stat_id: u32) -> Result<T> {
        let value = self
            .get_by_id(stat_id)
            .ok_or(YahooError::StatNotFound { stat_id })?;
        value.trim().parse().map_err(|_| YahooError::InvalidStatValue {
            stat_id,
            value: value.to_string(),
        })
    }

    pub fn get_float_by_id(&self, stat_id: u32) -> Result<f64> {
        self.parse_by_id(stat_id)
    }

    pub fn get_int_by_id(&self, stat_id: u32) -> Result<u32> {
        self.parse_by_id(stat_id)
    }

    /// Parse a `"made/attempted"` value stored under `stat_id`.
    pub fn compound(&self, stat_id: u32) -> Result<(u32, u32)> {
        let value = self
            .get_by_id(stat_id)
            .ok_or(YahooError::StatNotFound { stat_id })?;
        let invalid = || YahooError::InvalidCompoundStat {
            value: value.to_string(),
        };
        let (made, attempted) = value.split_once('/').ok_or_else(invalid)?;
        let made = made.trim().parse().map_err(|_| invalid())?;
        let attempted = attempted.trim().parse().map_err(|_| invalid())?;
        Ok((made, attempted))
    }

    /// Made and attempted for one category, falling back to a compound value
    /// stored under the made id.
    fn made_attempted(&self, made_id: u32, attempted_id: u32, attempts_optional: bool) -> Result<(u32, u32)> {
        let made = match self.get_int_by_id(made_id) {
            Ok(made) => made,
            Err(err) => return self.compound(made_id).map_err(|_| err),
        };
        match self.get_int_by_id(attempted_id) {
            Ok(attempted) => Ok((made, attempted)),
            Err(err) => match self.compound(made_id) {
                Ok((_, attempted)) => Ok((made, attempted)),
                Err(_) if attempts_optional => Ok((made, 0)),
                Err(_) => Err(err),
            },
        }
    }

    pub fn fgm_fga(&self) -> Result<(u32, u32)> {
        self.made_attempted(FGM, FGA, false)
    }

    pub fn ftm_fta(&self) -> Result<(u32, u32)> {
        self.made_attempted(FTM, FTA, false)
    }

    /// 3PA is optional and reads as 0 when absent.
    pub fn three_pm_pa(&self) -> Result<(u32, u32)> {
        self.made_attempted(THREE_PM, THREE_PA, true)
    }

    pub fn shooting_stats(&self) -> Result<ShootingStats> {
        let (fgm, fga) = self.fgm_fga()?;
        let (ftm, fta) = self.ftm_fta()?;
        let (tpm, tpa) = self.three_pm_pa()?;
        Ok(ShootingStats {
            fgm,
            fga,
            ftm,
            fta,
            tpm,
            tpa,
        })
    }
}

fn ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}

/// A basketball stat line. Missing stats read as zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NbaStats {
    pub games_played: u32,
    pub fgm: u32,
    pub fga: u32,
    pub fg_pct: f64,
    pub ftm: u32,
    pub fta: u32,
    pub ft_pct: f64,
    pub three_pm: u32,
    pub three_pa: u32,
    pub three_pct: f64,
    pub points: u32,
    pub rebounds: u32,
    pub offensive_rebounds: u32,
    pub assists: u32,
    pub steals: u32,
    pub blocks: u32,
    pub turnovers: u32,
}

impl NbaStats {
    pub fn parse(stats: &[Stat]) -> Self {
        let sh = StatHelper::new(stats);
        let int = |id| sh.get_int_by_id(id).unwrap_or(0);
        let float = |id| sh.get_float_by_id(id).unwrap_or(0.0);
        let pair = |made_id, attempted_id| {
            let compound = sh.compound(made_id).ok();
            let made = sh
                .get_int_by_id(made_id)
                .ok()
                .or(compound.map(|(m, _)| m))
                .unwrap_or(0);
            let attempted = sh
                .get_int_by_id(attempted_id)
                .ok()
                .or(compound.map(|(_, a)| a))
                .unwrap_or(0);
            (made, attempted)
        };

        let (fgm, fga) = pair(FGM, FGA);
        let (ftm, fta) = pair(FTM, FTA);
        let (three_pm, three_pa) = pair(THREE_PM, THREE_PA);

        let mut line = NbaStats {
            games_played: int(GAMES_PLAYED),
            fgm,
            fga,
            fg_pct: float(FG_PCT),
            ftm,
            fta,
            ft_pct: float(FT_PCT),
            three_pm,
            three_pa,
            three_pct: float(THREE_PCT),
            points: int(POINTS),
            rebounds: int(REBOUNDS),
            offensive_rebounds: int(OFFENSIVE_REBOUNDS),
            assists: int(ASSISTS),
            steals: int(STEALS),
            blocks: int(BLOCKS),
            turnovers: int(TURNOVERS),
        };

        if line.fg_pct == 0.0 {
            line.fg_pct = line.calculate_fg_pct();
        }
        if line.ft_pct == 0.0 {
            line.ft_pct = line.calculate_ft_pct();
        }
        if line.three_pct == 0.0 {
            line.three_pct = line.calculate_three_pct();
        }
        line
    }

    pub fn calculate_fg_pct(&self) -> f64 {
        ratio(self.fgm as f64, self.fga as f64)
    }

    pub fn calculate_ft_pct(&self) -> f64 {
        ratio(self.ftm as f64, self.fta as f64)
    }

    pub fn calculate_three_pct(&self) -> f64 {
        ratio(self.three_pm as f64, self.three_pa as f64)
    }

    /// PTS / (2 * (FGA + 0.44 * FTA))
    pub fn true_shooting_pct(&self) -> f64 {
        let attempts = self.fga as f64 + 0.44 * self.fta as f64;
        ratio(self.points as f64, 2.0 * attempts)
    }

    /// (FGM + 0.5 * 3PM) / FGA
    pub fn effective_fg_pct(&self) -> f64 {
        ratio(self.fgm as f64 + 0.5 * self.three_pm as f64, self.fga as f64)
    }
}
