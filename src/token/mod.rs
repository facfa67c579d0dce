// 能力令牌模块
// codec 负责对称加解密，capability 负责载荷结构与签发/兑付语义

pub mod capability;
pub mod codec;

pub use capability::{CapabilityError, CapabilityPayload};
pub use codec::{DecryptError, EncryptError};
