//! Output alphabets for the block codec.
//!
//! Each table is indexed by the block offset: bit `i` is the sub-cell at
//! row-major position `i` (row `i / 2`, column `i % 2`).

/// 2×2 blocks, indexed by the bit-packed quadrant offset.
pub const QUADRANTS: [char; 16] = [
    ' ', '\u{2598}', '\u{259d}', '\u{2580}', '\u{2596}', '\u{258c}', '\u{259e}', '\u{259b}',
    '\u{2597}', '\u{259a}', '\u{2590}', '\u{259c}', '\u{2584}', '\u{2599}', '\u{259f}', '\u{2588}',
];

/// 2×3 blocks. Offsets 21 and 42 (one full column) and 63 reuse the
/// legacy half and full blocks; the rest is U+1FB00..=U+1FB3B in order.
pub const SEXTANTS: [char; 64] = [
    ' ', '\u{1fb00}', '\u{1fb01}', '\u{1fb02}', '\u{1fb03}', '\u{1fb04}', '\u{1fb05}', '\u{1fb06}',
    '\u{1fb07}', '\u{1fb08}', '\u{1fb09}', '\u{1fb0a}', '\u{1fb0b}', '\u{1fb0c}', '\u{1fb0d}', '\u{1fb0e}',
    '\u{1fb0f}', '\u{1fb10}', '\u{1fb11}', '\u{1fb12}', '\u{1fb13}', '\u{258c}', '\u{1fb14}', '\u{1fb15}',
    '\u{1fb16}', '\u{1fb17}', '\u{1fb18}', '\u{1fb19}', '\u{1fb1a}', '\u{1fb1b}', '\u{1fb1c}', '\u{1fb1d}',
    '\u{1fb1e}', '\u{1fb1f}', '\u{1fb20}', '\u{1fb21}', '\u{1fb22}', '\u{1fb23}', '\u{1fb24}', '\u{1fb25}',
    '\u{1fb26}', '\u{1fb27}', '\u{2590}', '\u{1fb28}', '\u{1fb29}', '\u{1fb2a}', '\u{1fb2b}', '\u{1fb2c}',
    '\u{1fb2d}', '\u{1fb2e}', '\u{1fb2f}', '\u{1fb30}', '\u{1fb31}', '\u{1fb32}', '\u{1fb33}', '\u{1fb34}',
    '\u{1fb35}', '\u{1fb36}', '\u{1fb37}', '\u{1fb38}', '\u{1fb39}', '\u{1fb3a}', '\u{1fb3b}', '\u{2588}',
];

/// 2×4 blocks. U+1CD00..=U+1CDE5 in order, except the 26 patterns that
/// already have a legacy block character.
pub const OCTANTS: [char; 256] = [
    ' ', '\u{1cea8}', '\u{1ceab}', '\u{1fb82}', '\u{1cd00}', '\u{2598}', '\u{1cd01}', '\u{1cd02}',
    '\u{1cd03}', '\u{1cd04}', '\u{259d}', '\u{1cd05}', '\u{1cd06}', '\u{1cd07}', '\u{1cd08}', '\u{2580}',
    '\u{1cd09}', '\u{1cd0a}', '\u{1cd0b}', '\u{1cd0c}', '\u{1fbe6}', '\u{1cd0d}', '\u{1cd0e}', '\u{1cd0f}',
    '\u{1cd10}', '\u{1cd11}', '\u{1cd12}', '\u{1cd13}', '\u{1cd14}', '\u{1cd15}', '\u{1cd16}', '\u{1cd17}',
    '\u{1cd18}', '\u{1cd19}', '\u{1cd1a}', '\u{1cd1b}', '\u{1cd1c}', '\u{1cd1d}', '\u{1cd1e}', '\u{1cd1f}',
    '\u{1fbe7}', '\u{1cd20}', '\u{1cd21}', '\u{1cd22}', '\u{1cd23}', '\u{1cd24}', '\u{1cd25}', '\u{1cd26}',
    '\u{1cd27}', '\u{1cd28}', '\u{1cd29}', '\u{1cd2a}', '\u{1cd2b}', '\u{1cd2c}', '\u{1cd2d}', '\u{1cd2e}',
    '\u{1cd2f}', '\u{1cd30}', '\u{1cd31}', '\u{1cd32}', '\u{1cd33}', '\u{1cd34}', '\u{1cd35}', '\u{1fb85}',
    '\u{1cea3}', '\u{1cd36}', '\u{1cd37}', '\u{1cd38}', '\u{1cd39}', '\u{1cd3a}', '\u{1cd3b}', '\u{1cd3c}',
    '\u{1cd3d}', '\u{1cd3e}', '\u{1cd3f}', '\u{1cd40}', '\u{1cd41}', '\u{1cd42}', '\u{1cd43}', '\u{1cd44}',
    '\u{2596}', '\u{1cd45}', '\u{1cd46}', '\u{1cd47}', '\u{1cd48}', '\u{258c}', '\u{1cd49}', '\u{1cd4a}',
    '\u{1cd4b}', '\u{1cd4c}', '\u{259e}', '\u{1cd4d}', '\u{1cd4e}', '\u{1cd4f}', '\u{1cd50}', '\u{259b}',
    '\u{1cd51}', '\u{1cd52}', '\u{1cd53}', '\u{1cd54}', '\u{1cd55}', '\u{1cd56}', '\u{1cd57}', '\u{1cd58}',
    '\u{1cd59}', '\u{1cd5a}', '\u{1cd5b}', '\u{1cd5c}', '\u{1cd5d}', '\u{1cd5e}', '\u{1cd5f}', '\u{1cd60}',
    '\u{1cd61}', '\u{1cd62}', '\u{1cd63}', '\u{1cd64}', '\u{1cd65}', '\u{1cd66}', '\u{1cd67}', '\u{1cd68}',
    '\u{1cd69}', '\u{1cd6a}', '\u{1cd6b}', '\u{1cd6c}', '\u{1cd6d}', '\u{1cd6e}', '\u{1cd6f}', '\u{1cd70}',
    '\u{1cea0}', '\u{1cd71}', '\u{1cd72}', '\u{1cd73}', '\u{1cd74}', '\u{1cd75}', '\u{1cd76}', '\u{1cd77}',
    '\u{1cd78}', '\u{1cd79}', '\u{1cd7a}', '\u{1cd7b}', '\u{1cd7c}', '\u{1cd7d}', '\u{1cd7e}', '\u{1cd7f}',
    '\u{1cd80}', '\u{1cd81}', '\u{1cd82}', '\u{1cd83}', '\u{1cd84}', '\u{1cd85}', '\u{1cd86}', '\u{1cd87}',
    '\u{1cd88}', '\u{1cd89}', '\u{1cd8a}', '\u{1cd8b}', '\u{1cd8c}', '\u{1cd8d}', '\u{1cd8e}', '\u{1cd8f}',
    '\u{2597}', '\u{1cd90}', '\u{1cd91}', '\u{1cd92}', '\u{1cd93}', '\u{259a}', '\u{1cd94}', '\u{1cd95}',
    '\u{1cd96}', '\u{1cd97}', '\u{2590}', '\u{1cd98}', '\u{1cd99}', '\u{1cd9a}', '\u{1cd9b}', '\u{259c}',
    '\u{1cd9c}', '\u{1cd9d}', '\u{1cd9e}', '\u{1cd9f}', '\u{1cda0}', '\u{1cda1}', '\u{1cda2}', '\u{1cda3}',
    '\u{1cda4}', '\u{1cda5}', '\u{1cda6}', '\u{1cda7}', '\u{1cda8}', '\u{1cda9}', '\u{1cdaa}', '\u{1cdab}',
    '\u{2582}', '\u{1cdac}', '\u{1cdad}', '\u{1cdae}', '\u{1cdaf}', '\u{1cdb0}', '\u{1cdb1}', '\u{1cdb2}',
    '\u{1cdb3}', '\u{1cdb4}', '\u{1cdb5}', '\u{1cdb6}', '\u{1cdb7}', '\u{1cdb8}', '\u{1cdb9}', '\u{1cdba}',
    '\u{1cdbb}', '\u{1cdbc}', '\u{1cdbd}', '\u{1cdbe}', '\u{1cdbf}', '\u{1cdc0}', '\u{1cdc1}', '\u{1cdc2}',
    '\u{1cdc3}', '\u{1cdc4}', '\u{1cdc5}', '\u{1cdc6}', '\u{1cdc7}', '\u{1cdc8}', '\u{1cdc9}', '\u{1cdca}',
    '\u{1cdcb}', '\u{1cdcc}', '\u{1cdcd}', '\u{1cdce}', '\u{1cdcf}', '\u{1cdd0}', '\u{1cdd1}', '\u{1cdd2}',
    '\u{1cdd3}', '\u{1cdd4}', '\u{1cdd5}', '\u{1cdd6}', '\u{1cdd7}', '\u{1cdd8}', '\u{1cdd9}', '\u{1cdda}',
    '\u{2584}', '\u{1cddb}', '\u{1cddc}', '\u{1cddd}', '\u{1cdde}', '\u{2599}', '\u{1cddf}', '\u{1cde0}',
    '\u{1cde1}', '\u{1cde2}', '\u{259f}', '\u{1cde3}', '\u{2586}', '\u{1cde4}', '\u{1cde5}', '\u{2588}',
];

/// Braille pips for 2×2 blocks (dots 1, 4, 2, 5).
pub const BRAILLE_2X2: [char; 16] = [
    '\u{2800}', '\u{2801}', '\u{2808}', '\u{2809}', '\u{2802}', '\u{2803}', '\u{280a}', '\u{280b}',
    '\u{2810}', '\u{2811}', '\u{2818}', '\u{2819}', '\u{2812}', '\u{2813}', '\u{281a}', '\u{281b}',
];

/// Six-dot Braille pips for 2×3 blocks.
pub const BRAILLE_2X3: [char; 64] = [
    '\u{2800}', '\u{2801}', '\u{2808}', '\u{2809}', '\u{2802}', '\u{2803}', '\u{280a}', '\u{280b}',
    '\u{2810}', '\u{2811}', '\u{2818}', '\u{2819}', '\u{2812}', '\u{2813}', '\u{281a}', '\u{281b}',
    '\u{2804}', '\u{2805}', '\u{280c}', '\u{280d}', '\u{2806}', '\u{2807}', '\u{280e}', '\u{280f}',
    '\u{2814}', '\u{2815}', '\u{281c}', '\u{281d}', '\u{2816}', '\u{2817}', '\u{281e}', '\u{281f}',
    '\u{2820}', '\u{2821}', '\u{2828}', '\u{2829}', '\u{2822}', '\u{2823}', '\u{282a}', '\u{282b}',
    '\u{2830}', '\u{2831}', '\u{2838}', '\u{2839}', '\u{2832}', '\u{2833}', '\u{283a}', '\u{283b}',
    '\u{2824}', '\u{2825}', '\u{282c}', '\u{282d}', '\u{2826}', '\u{2827}', '\u{282e}', '\u{282f}',
    '\u{2834}', '\u{2835}', '\u{283c}', '\u{283d}', '\u{2836}', '\u{2837}', '\u{283e}', '\u{283f}',
];

/// Eight-dot Braille pips for 2×4 blocks.
pub const BRAILLE_2X4: [char; 256] = [
    '\u{2800}', '\u{2801}', '\u{2808}', '\u{2809}', '\u{2802}', '\u{2803}', '\u{280a}', '\u{280b}',
    '\u{2810}', '\u{2811}', '\u{2818}', '\u{2819}', '\u{2812}', '\u{2813}', '\u{281a}', '\u{281b}',
    '\u{2804}', '\u{2805}', '\u{280c}', '\u{280d}', '\u{2806}', '\u{2807}', '\u{280e}', '\u{280f}',
    '\u{2814}', '\u{2815}', '\u{281c}', '\u{281d}', '\u{2816}', '\u{2817}', '\u{281e}', '\u{281f}',
    '\u{2820}', '\u{2821}', '\u{2828}', '\u{2829}', '\u{2822}', '\u{2823}', '\u{282a}', '\u{282b}',
    '\u{2830}', '\u{2831}', '\u{2838}', '\u{2839}', '\u{2832}', '\u{2833}', '\u{283a}', '\u{283b}',
    '\u{2824}', '\u{2825}', '\u{282c}', '\u{282d}', '\u{2826}', '\u{2827}', '\u{282e}', '\u{282f}',
    '\u{2834}', '\u{2835}', '\u{283c}', '\u{283d}', '\u{2836}', '\u{2837}', '\u{283e}', '\u{283f}',
    '\u{2840}', '\u{2841}', '\u{2848}', '\u{2849}', '\u{2842}', '\u{2843}', '\u{284a}', '\u{284b}',
    '\u{2850}', '\u{2851}', '\u{2858}', '\u{2859}', '\u{2852}', '\u{2853}', '\u{285a}', '\u{285b}',
    '\u{2844}', '\u{2845}', '\u{284c}', '\u{284d}', '\u{2846}', '\u{2847}', '\u{284e}', '\u{284f}',
    '\u{2854}', '\u{2855}', '\u{285c}', '\u{285d}', '\u{2856}', '\u{2857}', '\u{285e}', '\u{285f}',
    '\u{2860}', '\u{2861}', '\u{2868}', '\u{2869}', '\u{2862}', '\u{2863}', '\u{286a}', '\u{286b}',
    '\u{2870}', '\u{2871}', '\u{2878}', '\u{2879}', '\u{2872}', '\u{2873}', '\u{287a}', '\u{287b}',
    '\u{2864}', '\u{2865}', '\u{286c}', '\u{286d}', '\u{2866}', '\u{2867}', '\u{286e}', '\u{286f}',
    '\u{2874}', '\u{2875}', '\u{287c}', '\u{287d}', '\u{2876}', '\u{2877}', '\u{287e}', '\u{287f}',
    '\u{2880}', '\u{2881}', '\u{2888}', '\u{2889}', '\u{2882}', '\u{2883}', '\u{288a}', '\u{288b}',
    '\u{2890}', '\u{2891}', '\u{2898}', '\u{2899}', '\u{2892}', '\u{2893}', '\u{289a}', '\u{289b}',
    '\u{2884}', '\u{2885}', '\u{288c}', '\u{288d}', '\u{2886}', '\u{2887}', '\u{288e}', '\u{288f}',
    '\u{2894}', '\u{2895}', '\u{289c}', '\u{289d}', '\u{2896}', '\u{2897}', '\u{289e}', '\u{289f}',
    '\u{28a0}', '\u{28a1}', '\u{28a8}', '\u{28a9}', '\u{28a2}', '\u{28a3}', '\u{28aa}', '\u{28ab}',
    '\u{28b0}', '\u{28b1}', '\u{28b8}', '\u{28b9}', '\u{28b2}', '\u{28b3}', '\u{28ba}', '\u{28bb}',
    '\u{28a4}', '\u{28a5}', '\u{28ac}', '\u{28ad}', '\u{28a6}', '\u{28a7}', '\u{28ae}', '\u{28af}',
    '\u{28b4}', '\u{28b5}', '\u{28bc}', '\u{28bd}', '\u{28b6}', '\u{28b7}', '\u{28be}', '\u{28bf}',
    '\u{28c0}', '\u{28c1}', '\u{28c8}', '\u{28c9}', '\u{28c2}', '\u{28c3}', '\u{28ca}', '\u{28cb}',
    '\u{28d0}', '\u{28d1}', '\u{28d8}', '\u{28d9}', '\u{28d2}', '\u{28d3}', '\u{28da}', '\u{28db}',
    '\u{28c4}', '\u{28c5}', '\u{28cc}', '\u{28cd}', '\u{28c6}', '\u{28c7}', '\u{28ce}', '\u{28cf}',
    '\u{28d4}', '\u{28d5}', '\u{28dc}', '\u{28dd}', '\u{28d6}', '\u{28d7}', '\u{28de}', '\u{28df}',
    '\u{28e0}', '\u{28e1}', '\u{28e8}', '\u{28e9}', '\u{28e2}', '\u{28e3}', '\u{28ea}', '\u{28eb}',
    '\u{28f0}', '\u{28f1}', '\u{28f8}', '\u{28f9}', '\u{28f2}', '\u{28f3}', '\u{28fa}', '\u{28fb}',
    '\u{28e4}', '\u{28e5}', '\u{28ec}', '\u{28ed}', '\u{28e6}', '\u{28e7}', '\u{28ee}', '\u{28ef}',
    '\u{28f4}', '\u{28f5}', '\u{28fc}', '\u{28fd}', '\u{28f6}', '\u{28f7}', '\u{28fe}', '\u{28ff}',
];
