//! Network-wide constants.

/// Decimal places of the CLAW token. 1 CLAW = 10^18 attoCLAW.
pub const CLAW_DECIMALS: u32 = 18;

/// Companion contracts deployed on the Claws network. The fund reads
/// uptime scores from the uptime contract and links proposals to posts
/// on the bulletin board.
pub const BOND_REGISTRY_ADDRESS: &str =
    "claw1qqqqqqqqqqqqqpgqkru70vyjyx3t5je4v2ywcjz33xnkfjfws0cszj63m0";
pub const UPTIME_CONTRACT_ADDRESS: &str =
    "claw1qqqqqqqqqqqqqpgqpd08j8dduhxqw2phth6ph8rumsvcww92s0csrugp8z";
pub const BULLETIN_BOARD_ADDRESS: &str =
    "claw1qqqqqqqqqqqqqpgqy4x50k4sxaqj0dlmgmrj93krldw54expkgcqnzkmx3";
