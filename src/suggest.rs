//! Description Suggestions
//!
//! Canned per-category description templates behind the edit form's
//! one-tap "write it for me" button. Pure over (category, title) with an
//! injected roll.

use crate::models::Category;

fn templates(category: Category) -> &'static [&'static str] {
    match category {
        Category::Food => &[
            "{} 評價很高，記得先看 Google Maps 營業時間！",
            "聽說 {} 的招牌菜必點，準備好胃口了嗎？",
            "這家店可能需要排隊，建議避開尖峰時段。",
            "記得拍照打卡，這裡的裝潢很漂亮！",
        ],
        Category::Inventory => &[
            "別忘了把 {} 放進背包最外層，方便拿取。",
            "檢查一下 {} 是否足夠，寧可多帶也不要少帶。",
            "出發前再次確認有沒有帶到！",
        ],
        Category::Critical => &[
            "{} 非常重要！建議設個鬧鐘提醒自己。",
            "再次確認 {} 的時間地點，絕對不能遲到！",
            "這件事優先級最高，務必專注完成。",
        ],
        Category::A => &[
            "{} 需要花比較多時間，記得預留交通緩衝。",
            "這趟行程比較長，帶個行動電源或水吧。",
            "若是戶外行程，記得確認天氣狀況。",
        ],
        Category::B => &[
            "{} 就在附近，可以順便看看周邊有什麼好玩的。",
            "短暫的行程，適合穿插在空檔中。",
        ],
        Category::Todo => &[
            "{} 趕快完成它，心情會更輕鬆！",
            "把 {} 分解成小步驟會比較好執行喔。",
            "做完這件事給自己一個小獎勵吧！",
        ],
        Category::Costume => &[
            "{} 的細節是關鍵，加油！",
            "穿起來舒適最重要，記得試穿確認活動度。",
        ],
        Category::Meetup => &[
            "跟對方確認一下時間地點，以免撲空。",
            "準備個小禮物或話題，讓聚會更開心！",
        ],
        Category::Daily | Category::C | Category::D | Category::Uncertain => &[
            "關於 {}，可以先查查看有沒有相關優惠或活動。",
            "放輕鬆，享受 {} 的過程吧！",
            "這聽起來很有趣，期待！",
        ],
    }
}

/// Pick a canned description. `roll` receives the template count and must
/// return an index below it; out-of-range rolls are clamped.
pub fn suggest_description(
    category: Category,
    title: &str,
    roll: impl FnOnce(usize) -> usize,
) -> String {
    let title = if title.is_empty() { "行程" } else { title };
    let list = templates(category);
    let idx = roll(list.len()).min(list.len() - 1);
    list[idx].replace("{}", title)
}
