use crate::models::conversion::{ConversionOutcome, ConversionRequest};

// 轉換服務接口，負責單次文字 <-> 二進位轉換
pub trait ConverterServiceTrait: Send + Sync {
    /// 依請求中的方向執行轉換
    /// # 參數
    /// - request: 輸入路徑、輸出路徑與轉換方向
    /// # 回傳
    /// - 成功、部分成功或失敗，每次呼叫只有一個結果
    fn convert(&self, request: &ConversionRequest) -> ConversionOutcome;
}
