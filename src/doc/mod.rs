/*!
Additional documentation.

# Result codes

Every operation returns `Result<_, Error>`.  The wire values are those of the C interface and are stable.

| `Error` | Wire constant | Value | Meaning |
| ------- | ------------- | ----- | ------- |
| (success) | `S_OK` | `0x0` | The full result was written and terminated. |
| `EndOfFile` | `STRSAFE_E_END_OF_FILE` | `0x1` | Line input ended before anything was read. |
| `InvalidParameter` | `STRSAFE_E_INVALID_PARAMETER` | `0x2` | Zero or over-ceiling capacity, unterminated destination on an append, missing string, or a formatter error. |
| `InsufficientBuffer` | `STRSAFE_E_INSUFFICIENT_BUFFER` | `0x4` | The result was truncated.  The destination holds a terminated prefix, unless flags say otherwise. |

# Flags

| Flag | Value | Effect |
| ---- | ----- | ------ |
| `IGNORE_NULLS` | `0x0100` | A missing source is empty; a missing destination is allowed with zero capacity. |
| `FILL_BEHIND_NULL` | `0x0200` | On success, every unit after the terminator is filled. |
| `FILL_ON_FAILURE` | `0x0400` | On failure, the whole destination is filled, then emptied. |
| `NULL_ON_FAILURE` | `0x0800` | On failure, the destination is emptied. |
| `NO_TRUNCATION` | `0x1000` | On truncation, the destination is emptied rather than left holding a prefix. |

The low byte of the flag word is the fill byte.  Fills are byte patterns: a wide unit filled with `0xCC` holds `0xCC` in every byte.

Processing order on failure is `NO_TRUNCATION`, then `FILL_ON_FAILURE`, then `NULL_ON_FAILURE`.  None of them write anything if the capacity itself was rejected.

# Destination states

Over a single call the destination goes through:

```text
UNEXAMINED -> VALIDATED -> (SEEKED, appends only) -> WRITING -> TERMINATED -> (FILLED)
```

A failing call ends in one of:

| State | Reached when |
| ----- | ------------ |
| `UNCHANGED` | The capacity was rejected, or an append found no terminator, and no failure flags apply. |
| `TRUNCATED_TERMINATED` | The result was truncated and no failure flags apply. |
| `CLEARED_TERMINATED` | `NO_TRUNCATION` or `NULL_ON_FAILURE` applied. |
| `FILL_BYTES_TERMINATED` | `FILL_ON_FAILURE` applied. |

Every state other than `UNCHANGED` has a zero unit somewhere below the capacity.

# Capacity

`MAX_CCH` is `2^31 - 1` units.  For byte capacities the ceiling is `MAX_CCH` times the unit size, and a trailing partial unit is ignored.  `remaining` always counts the terminator's slot, so `end + remaining == capacity` on success (in units for `cch`; in bytes for `cb`, less any ignored partial unit).
*/
