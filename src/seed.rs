//! Seed Data
//!
//! Fixed starter item set used when no snapshot exists (or it fails to
//! parse). Dates are for the 2026 trip.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{Category, Item};

fn seed(
    title: &str,
    category: Category,
    desc: &str,
    date: Option<&str>,
    time: Option<&str>,
    progress: u8,
) -> Item {
    Item {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: (!desc.is_empty()).then(|| desc.to_string()),
        category,
        date: date.and_then(|d| format!("2026-{d}").parse::<NaiveDate>().ok()),
        time: time.map(str::to_string),
        is_completed: progress == 100,
        progress: Some(progress),
        location: None,
        suggested_duration: None,
        timer_started_at: None,
    }
}

/// The starter checklist.
pub fn initial_items() -> Vec<Item> {
    use Category::*;
    vec![
        // Critical
        seed("印製認親卡/名片", Critical, "務必於 4/5 前完成設計與送印，以免開天窗。", Some("04-04"), None, 0),
        seed("季雪專場", Critical, "16:00 - 22:00。需提前確認交通與門票。", Some("04-05"), Some("16:00"), 0),
        seed("獸曜日 (嘉義日招所)", Critical, "需轉乘高鐵 & 區間車，注意轉乘時間。", Some("04-12"), None, 0),
        seed("計畫通行專場", Critical, "16:00 開始。準備好體力與應援物。", Some("04-19"), Some("16:00"), 0),
        seed("CCF", Critical, "全天活動。服裝務必在此之前 100% 完成。", Some("04-26"), Some("09:00"), 0),
        seed("PF Day1", Critical, "全天活動。主要場次。", Some("05-03"), Some("10:00"), 0),
        seed("PF Day2", Critical, "全天活動。收尾與交流。", Some("05-04"), Some("10:00"), 0),
        // Daily
        seed("打音遊", Daily, "維持手感習慣，每日至少一局。", None, None, 0),
        // Costume (progress tracking)
        seed("綠色帽外套", Costume, "尋找版型或現成品修改。", None, None, 25),
        seed("客製化修字白T", Costume, "設計圖稿並送印。", None, None, 0),
        seed("黑色工裝褲", Costume, "需有多口袋設計，確認尺寸。", None, None, 50),
        seed("仿起司片裝飾", Costume, "造型用道具，需耐用。", None, None, 75),
        seed("黑色細全框眼鏡", Costume, "無鏡片，造型用。", None, None, 100),
        // A: half-day-plus trips
        seed("潮月沙茶匠 (桃園)", A, "知名沙茶火鍋，建議預留半天含交通與用餐。", Some("04-14"), None, 0),
        seed("胖老虎桌遊 (板橋)", A, "適合多人同樂，建議下午時段。", None, None, 0),
        seed("高雄市立圖書館 & 咖啡", A, "參觀樓上建築設計，並於館內用餐。", None, None, 0),
        seed("台中麗寶福容 + Outlet", A, "體驗獸無限場景，適合拍照。", None, None, 0),
        // B: short outings
        seed("三創十二樓 & 光華", B, "3C愛好者必逛，有炬集站時可去。", None, None, 0),
        seed("草空間 (北車)", B, "放鬆讀書的好地方，週一至週四擇一日去。", None, None, 0),
        seed("安利美特", B, "第一週順路可去，補給動漫周邊。", None, None, 0),
        // C: relax
        seed("綠境 Aroma (圓山)", C, "品嚐麻婆豆腐，購買紀念明信片。", None, None, 0),
        seed("藏壽司", C, "連鎖壽司，有扭蛋可玩。", None, None, 0),
        seed("公館雪腐冰", C, "第一週必吃！口感綿密的雪花冰。", None, None, 0),
        // D: fillers
        seed("胡椒餅", D, "回家前隨手買一個當點心。", None, None, 0),
        seed("台中逢甲逛街", D, "需等朋友確認時間，隨意逛逛。", None, None, 0),
        // Todo
        seed("整理行李清單", Todo, "出發前一週完成初版。", None, None, 0),
        // Inventory
        seed("延長線 (3-4插座)", Inventory, "住宿必備，確保電子設備充電無虞。", None, None, 0),
        seed("大且堅固的雨傘", Inventory, "北部天氣多變，需耐強風。", None, None, 0),
        seed("DHC 速攻藍莓和鋅", Inventory, "保持體力與視力清晰。", None, None, 0),
        // Food
        seed("萬華市場生魚片", Food, "經典台灣美食，新鮮平價。", None, None, 0),
        seed("涼拌冷筍", Food, "清爽開胃，季節限定。", None, None, 0),
        seed("彰化控肉飯", Food, "經典彰化味，與朋友約時一起吃。", None, None, 0),
        // Meetup
        seed("約史考特吃飯", Meetup, "確認對方有空的日子。", None, None, 0),
        // Uncertain
        seed("烏托邦 獸人派對", Uncertain, "注意官方公告與場次預告。", None, None, 0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FUNCTION_BASED_CATS, TIME_BASED_CATS};

    #[test]
    fn test_seed_covers_every_category() {
        let items = initial_items();
        for cat in TIME_BASED_CATS.iter().chain(FUNCTION_BASED_CATS) {
            assert!(
                items.iter().any(|i| i.category == *cat),
                "missing seed for {:?}",
                cat
            );
        }
    }

    #[test]
    fn test_seed_progress_matches_completion() {
        for item in initial_items() {
            if item.progress == Some(100) {
                assert!(item.is_completed, "{} should be completed", item.title);
            }
        }
    }

    #[test]
    fn test_seed_dates_parse() {
        let items = initial_items();
        let dated = items.iter().filter(|i| i.date.is_some()).count();
        assert!(dated >= 7);
    }
}
