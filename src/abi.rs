//! ABI bindings for every contract the pipeline talks to.
//!
//! Generated with `alloy::sol!`; only the functions the pipeline actually
//! encodes or decodes are declared. Param structs shared between the plain
//! router and the secondary-fee proxy are declared once at the top level.

use alloy::sol;

sol! {
    /// Params for a single-pool exact-input swap.
    struct ExactInputSingleParams {
        address tokenIn;
        address tokenOut;
        uint24 fee;
        address recipient;
        uint256 amountIn;
        uint256 amountOutMinimum;
        uint160 sqrtPriceLimitX96;
    }

    /// Params for a single-pool exact-output swap.
    struct ExactOutputSingleParams {
        address tokenIn;
        address tokenOut;
        uint24 fee;
        address recipient;
        uint256 amountOut;
        uint256 amountInMaximum;
        uint160 sqrtPriceLimitX96;
    }

    /// Params for a multi-pool exact-input swap over an encoded path.
    struct ExactInputParams {
        bytes path;
        address recipient;
        uint256 amountIn;
        uint256 amountOutMinimum;
    }

    /// Params for a multi-pool exact-output swap over a reversed path.
    struct ExactOutputParams {
        bytes path;
        address recipient;
        uint256 amountOut;
        uint256 amountInMaximum;
    }

    /// One platform fee taken by the secondary-fee proxy.
    struct SecondaryFeeParams {
        address recipient;
        uint16 basisPoints;
    }

    interface IMulticall3 {
        struct Call3 {
            address target;
            bool allowFailure;
            bytes callData;
        }

        struct Result {
            bool success;
            bytes returnData;
        }

        function aggregate3(Call3[] calldata calls)
            external
            payable
            returns (Result[] memory returnData);
    }

    interface IUniswapV3Pool {
        function slot0()
            external
            view
            returns (
                uint160 sqrtPriceX96,
                int24 tick,
                uint16 observationIndex,
                uint16 observationCardinality,
                uint16 observationCardinalityNext,
                uint8 feeProtocol,
                bool unlocked
            );

        function liquidity() external view returns (uint128);
    }

    interface IQuoterV2 {
        struct QuoteExactInputSingleParams {
            address tokenIn;
            address tokenOut;
            uint256 amountIn;
            uint24 fee;
            uint160 sqrtPriceLimitX96;
        }

        struct QuoteExactOutputSingleParams {
            address tokenIn;
            address tokenOut;
            uint256 amount;
            uint24 fee;
            uint160 sqrtPriceLimitX96;
        }

        function quoteExactInputSingle(QuoteExactInputSingleParams memory params)
            external
            returns (
                uint256 amountOut,
                uint160 sqrtPriceX96After,
                uint32 initializedTicksCrossed,
                uint256 gasEstimate
            );

        function quoteExactOutputSingle(QuoteExactOutputSingleParams memory params)
            external
            returns (
                uint256 amountIn,
                uint160 sqrtPriceX96After,
                uint32 initializedTicksCrossed,
                uint256 gasEstimate
            );

        function quoteExactInput(bytes memory path, uint256 amountIn)
            external
            returns (
                uint256 amountOut,
                uint160[] memory sqrtPriceX96AfterList,
                uint32[] memory initializedTicksCrossedList,
                uint256 gasEstimate
            );

        function quoteExactOutput(bytes memory path, uint256 amountOut)
            external
            returns (
                uint256 amountIn,
                uint160[] memory sqrtPriceX96AfterList,
                uint32[] memory initializedTicksCrossedList,
                uint256 gasEstimate
            );
    }

    interface ISwapRouter {
        function exactInputSingle(ExactInputSingleParams calldata params)
            external
            payable
            returns (uint256 amountOut);

        function exactOutputSingle(ExactOutputSingleParams calldata params)
            external
            payable
            returns (uint256 amountIn);

        function exactInput(ExactInputParams calldata params)
            external
            payable
            returns (uint256 amountOut);

        function exactOutput(ExactOutputParams calldata params)
            external
            payable
            returns (uint256 amountIn);

        function multicall(uint256 deadline, bytes[] calldata data)
            external
            payable
            returns (bytes[] memory results);
    }

    interface ISecondaryFee {
        function exactInputSingleWithSecondaryFee(
            SecondaryFeeParams[] calldata secondaryFees,
            ExactInputSingleParams calldata params
        ) external payable returns (uint256 amountOut);

        function exactOutputSingleWithSecondaryFee(
            SecondaryFeeParams[] calldata secondaryFees,
            ExactOutputSingleParams calldata params
        ) external payable returns (uint256 amountIn);

        function exactInputWithSecondaryFee(
            SecondaryFeeParams[] calldata secondaryFees,
            ExactInputParams calldata params
        ) external payable returns (uint256 amountOut);

        function exactOutputWithSecondaryFee(
            SecondaryFeeParams[] calldata secondaryFees,
            ExactOutputParams calldata params
        ) external payable returns (uint256 amountIn);

        function unwrapNativeToken(uint256 amountMinimum) external payable;

        function paused() external view returns (bool);
    }

    interface IERC20 {
        function decimals() external view returns (uint8);

        function allowance(address owner, address spender)
            external
            view
            returns (uint256);

        function approve(address spender, uint256 amount)
            external
            returns (bool);
    }
}
