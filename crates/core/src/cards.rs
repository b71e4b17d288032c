//! Perspective card catalog.
//!
//! Each card pairs a single-letter tag with a reframing question. The mock
//! generator draws a fixed subset; a future inference service would select
//! cards dynamically from the same catalog.

/// One reframing angle the coach can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerspectiveCard {
    /// Single-letter tag identifying the card.
    pub tag: char,
    /// Short display label.
    pub label: &'static str,
    /// The question the card poses.
    pub question: &'static str,
}

/// All cards, in tag order.
pub const PERSPECTIVE_CARDS: &[PerspectiveCard] = &[
    PerspectiveCard {
        tag: 'A',
        label: "前提の揺さぶり",
        question: "当たり前だと思っている前提は何？",
    },
    PerspectiveCard {
        tag: 'B',
        label: "対立仮説",
        question: "別の説明があるとしたら何？",
    },
    PerspectiveCard {
        tag: 'C',
        label: "価値観の衝突",
        question: "何が守られなかった？（尊重／自由／公平／成長／安心 など）",
    },
    PerspectiveCard {
        tag: 'D',
        label: "期待のズレ",
        question: "本当は何を期待していた？",
    },
    PerspectiveCard {
        tag: 'E',
        label: "恐れの正体",
        question: "失うのが怖かったものは何？",
    },
    PerspectiveCard {
        tag: 'F',
        label: "コントロール境界",
        question: "自分が変えられること／変えられないことはどこ？",
    },
    PerspectiveCard {
        tag: 'G',
        label: "関係性の視点",
        question: "相手は何を守ろうとしていた可能性がある？",
    },
    PerspectiveCard {
        tag: 'H',
        label: "再現条件",
        question: "同じことが起きる条件は何？",
    },
    PerspectiveCard {
        tag: 'I',
        label: "反転テスト",
        question: "友達が同じ状況なら、あなたは何と言う？",
    },
    PerspectiveCard {
        tag: 'J',
        label: "時間軸",
        question: "1週間後／1年後でも重要？それはなぜ？",
    },
    PerspectiveCard {
        tag: 'K',
        label: "代替行動",
        question: "次回、\"1つだけ\"変えるなら何？",
    },
];

/// Look up a card by its tag.
pub fn card(tag: char) -> Option<&'static PerspectiveCard> {
    PERSPECTIVE_CARDS.iter().find(|c| c.tag == tag)
}
