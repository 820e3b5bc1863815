use std::time::Duration;

use super::messages::Message;
use super::order::OrderPayload;

/// Blocking notifications shown to the shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    EmptyCart,
    OrderPlaced,
    OrderFailed,
}

impl Notice {
    pub fn text(self) -> &'static str {
        match self {
            Notice::EmptyCart => "Giỏ hàng của bạn đang trống! Hãy thiết kế một chiếc túi trước nhé.",
            Notice::OrderPlaced => {
                "Đặt hàng thành công!\nĐơn hàng đã được lưu vào hệ thống.\nChúng tôi sẽ liên hệ sớm."
            }
            Notice::OrderFailed => "Có lỗi xảy ra khi gửi đơn hàng. Vui lòng thử lại!",
        }
    }

    pub fn is_error(self) -> bool {
        !matches!(self, Notice::OrderPlaced)
    }
}

/// Work the controller asks the UI shell to carry out.
///
/// Scheduled messages and sent orders cannot be cancelled once returned;
/// handlers for their follow-up messages must tolerate arriving late.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Schedule { delay: Duration, message: Message },
    Notify(Notice),
    PickProofFile,
    SendOrder(OrderPayload),
}
