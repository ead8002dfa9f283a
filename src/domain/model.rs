use serde::{Deserialize, Serialize};

/// 抽獎參加者。`name` 為唯一識別鍵。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub metadata: Vec<String>,
}

/// SMTP 認證用的寄件者身分。core 邏輯不解讀其內容。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderIdentity {
    pub address: String,
    pub credential: String,
}

/// One draw over the roster: `targets[i]` is the index of the participant
/// that participant `i` must gift. Always a fixed-point-free bijection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    targets: Vec<usize>,
}

impl Assignment {
    pub fn new(targets: Vec<usize>) -> Self {
        Self { targets }
    }

    pub fn target_of(&self, giver: usize) -> usize {
        self.targets[giver]
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// 檢查無固定點 (沒有人抽到自己) 且為雙射。
    pub fn is_derangement(&self) -> bool {
        let n = self.targets.len();
        let mut seen = vec![false; n];

        for (giver, &target) in self.targets.iter().enumerate() {
            if target >= n || target == giver || seen[target] {
                return false;
            }
            seen[target] = true;
        }

        true
    }

    /// Iterate `(giver, target)` index pairs in roster order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.targets.iter().copied().enumerate()
    }
}

/// Outcome of one dispatch loop. Failures are recorded, not propagated,
/// so one bad recipient never stops the rest of the roster.
#[derive(Debug, Clone, Default)]
pub struct DispatchSummary {
    pub sent: usize,
    pub failures: Vec<DispatchFailure>,
}

#[derive(Debug, Clone)]
pub struct DispatchFailure {
    pub name: String,
    pub reason: String,
}

impl DispatchSummary {
    pub fn all_sent(&self) -> bool {
        self.failures.is_empty()
    }
}
