use std::io;
use crate::models::facade::{FacadeInput, FacadeOutput};

// Facade 接口，負責協調覆寫確認與轉換流程
pub trait ConversionFacadeTrait: Send + Sync {
    /// 執行一次轉換，必要時先詢問是否覆寫既有輸出檔
    /// # 參數
    /// - input: 輸入、輸出路徑與轉換方向
    /// # 回傳
    /// - 轉換結果與顯示給使用者的狀態字串；詢問失敗時返回 IO 錯誤
    fn execute_conversion(&self, input: FacadeInput) -> io::Result<FacadeOutput>;
}
